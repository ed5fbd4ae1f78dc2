//! Query model for launch listings: paging, sorting and filter predicates,
//! rendered to the service's query-parameter dialect.

use crate::http::ReqParam;

#[derive(Debug, Clone, Default)]
pub struct FilterOption {
    pub paging: Option<Paging>,
    pub sorting: Option<Sorting>,
    pub filters: Vec<Filter>,
}

impl FilterOption {
    pub fn to_query_params(&self) -> Vec<ReqParam> {
        let mut params = vec![];
        if let Some(paging) = &self.paging {
            params.push(ReqParam::new("page.page", paging.number.to_string()));
            params.push(ReqParam::new("page.size", paging.size.to_string()));
        }
        if let Some(sorting) = &self.sorting {
            params.push(ReqParam::new("page.sort", sorting.to_query_value()));
        }
        for filter in &self.filters {
            params.push(ReqParam::new(
                format!(
                    "filter.{}.{}",
                    filter.operation.as_query_key(),
                    filter.field
                ),
                filter.value.clone(),
            ));
        }
        params
    }
}

/// One-based page number plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub number: u32,
    pub size: u32,
}

impl Paging {
    pub fn new(number: u32, size: u32) -> Self {
        Paging { number, size }
    }
}

#[derive(Debug, Clone)]
pub struct Sorting {
    pub fields: Vec<String>,
    pub direction: SortDirection,
}

impl Sorting {
    pub fn new<S: Into<String>>(fields: Vec<S>, direction: SortDirection) -> Self {
        Sorting {
            fields: fields.into_iter().map(Into::into).collect(),
            direction,
        }
    }

    fn to_query_value(&self) -> String {
        format!("{},{}", self.fields.join(","), self.direction.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Filter {
    pub operation: FilterOperation,
    pub field: String,
    pub value: String,
}

impl Filter {
    pub fn new(
        operation: FilterOperation,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Filter {
            operation,
            field: field.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperation {
    Equals,
    NotEquals,
    Contains,
    NotContains,
    In,
    GreaterThan,
    GreaterThanOrEquals,
    LowerThan,
    LowerThanOrEquals,
    Between,
    Has,
}

impl FilterOperation {
    pub fn as_query_key(&self) -> &'static str {
        match self {
            FilterOperation::Equals => "eq",
            FilterOperation::NotEquals => "ne",
            FilterOperation::Contains => "cnt",
            FilterOperation::NotContains => "!cnt",
            FilterOperation::In => "in",
            FilterOperation::GreaterThan => "gt",
            FilterOperation::GreaterThanOrEquals => "gte",
            FilterOperation::LowerThan => "lt",
            FilterOperation::LowerThanOrEquals => "lte",
            FilterOperation::Between => "btw",
            FilterOperation::Has => "has",
        }
    }
}
