//! Markup rendering of a certificate.
//!
//! The template is registered under a `.html` name so minijinja escapes every
//! interpolated value.

use super::CertificateDocument;
use crate::error::Result;
use minijinja::Environment;

const TEMPLATE_NAME: &str = "certificate.html";

const CERTIFICATE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }} - {{ id }}</title>
<style>
  body { font-family: Helvetica, Arial, sans-serif; margin: 3em; color: #1f2937; }
  h1 { font-size: 1.6em; margin-bottom: 1em; }
  p { margin: 0.4em 0; }
</style>
</head>
<body>
<h1>{{ title }}</h1>
{% for label, value in fields %}<p><strong>{{ label }}:</strong> {{ value }}</p>
{% endfor %}</body>
</html>
"#;

pub fn render(document: &CertificateDocument) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, CERTIFICATE_TEMPLATE)?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let html = template.render(minijinja::context! {
        title => document.title,
        id => document.id,
        fields => document.fields(),
    })?;
    Ok(html)
}
