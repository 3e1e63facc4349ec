use crate::clock::Clock;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::pipeline::{ViewOptions, ViewPipeline};
use crate::query::{SortKey, TypeFilter};

/// One-shot browse request: the controls a user would have touched, in order.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub type_filter: TypeFilter,
    pub search: Option<String>,
    /// Sort clicks, applied in order. Repeating a key flips the direction.
    pub sorts: Vec<SortKey>,
    pub page: usize,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            type_filter: TypeFilter::All,
            search: None,
            sorts: Vec::new(),
            page: 1,
        }
    }
}

pub fn run<C: Clock>(
    records: Vec<Record>,
    options: ViewOptions,
    clock: C,
    request: &ListRequest,
) -> Result<CmdResult> {
    let mut pipeline = ViewPipeline::new(records, options, clock)?;

    pipeline.set_type_filter(request.type_filter);
    if let Some(search) = &request.search {
        pipeline.set_search_text(search.as_str());
        pipeline.flush_search();
    }
    for key in &request.sorts {
        pipeline.set_sort(*key);
    }
    pipeline.set_page(request.page);

    let mut result = CmdResult::default();
    if pipeline.filtered_count() == 0 {
        result.add_message(CmdMessage::info("No credits found."));
    } else if pipeline.page_number() != request.page {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is out of range, showing page {} of {}.",
            request.page,
            pipeline.page_number(),
            pipeline.last_page()
        )));
    }

    Ok(result.with_page(pipeline.page_view()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::commands::MessageLevel;
    use crate::model::Status;
    use crate::query::SortDirection;
    use crate::source::memory::fixtures::SourceFixture;

    fn run_default(records: Vec<Record>, request: &ListRequest) -> CmdResult {
        run(records, ViewOptions::default(), SystemClock, request).unwrap()
    }

    #[test]
    fn lists_first_page_by_default() {
        let records = SourceFixture::new().with_records(20).records();
        let result = run_default(records, &ListRequest::default());

        let page = result.page.unwrap();
        assert_eq!(page.records.len(), 9);
        assert_eq!(page.page_number, 1);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.total, 20);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn applies_filter_search_and_sort_clicks() {
        let records = SourceFixture::new()
            .with_record("A", "Zeta Forest", 2020, Status::Active)
            .with_record("B", "Alpha Forest", 2019, Status::Active)
            .with_record("C", "Beta Forest", 2021, Status::Retired)
            .with_record("D", "Wind", 2022, Status::Active)
            .records();
        let request = ListRequest {
            type_filter: TypeFilter::Active,
            search: Some("forest".to_string()),
            sorts: vec![SortKey::Name, SortKey::Name],
            page: 1,
        };

        let page = run_default(records, &request).page.unwrap();

        let ids: Vec<_> = page.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(page.query.sort_direction(), SortDirection::Descending);
        assert_eq!(page.query.search_text(), "forest");
    }

    #[test]
    fn warns_when_page_is_clamped() {
        let records = SourceFixture::new().with_records(10).records();
        let request = ListRequest {
            page: 5,
            ..ListRequest::default()
        };

        let result = run_default(records, &request);

        assert_eq!(result.page.unwrap().page_number, 2);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn reports_empty_result() {
        let records = SourceFixture::new().with_records(3).records();
        let request = ListRequest {
            search: Some("nothing like this".to_string()),
            ..ListRequest::default()
        };

        let result = run_default(records, &request);

        let page = result.page.unwrap();
        assert!(page.records.is_empty());
        assert_eq!(page.last_page, 1);
        assert_eq!(result.messages[0].content, "No credits found.");
    }
}
