//! Order list query parsing: pagination, status filter, search, sorting
//! and date windows, validated up front so the store only sees clean
//! values (sort columns in particular are interpolated into SQL and must
//! come from the whitelist).

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ApiError;
use crate::orders::models::{OrderListQuery, OrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

/// A validated order listing request.
#[derive(Debug)]
pub struct OrderFilter {
    pub page: i64,
    pub limit: i64,
    pub status: Option<OrderStatus>,
    pub service_type_id: Option<i64>,
    pub search: Option<String>,
    /// Column name, already whitelisted
    pub sort_column: &'static str,
    pub sort_dir: SortDir,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

fn sort_column(key: &str) -> Result<&'static str, ApiError> {
    match key {
        "createdAt" => Ok("created_at"),
        "updatedAt" => Ok("updated_at"),
        "orderCode" => Ok("order_code"),
        "totalAmount" => Ok("total_amount"),
        "weight" => Ok("weight"),
        "status" => Ok("status"),
        _ => Err(ApiError::validation("Invalid sort field")),
    }
}

/// Accepts RFC 3339 timestamps or bare dates. A bare date resolves to the
/// start of that day, or its end when it bounds the upper side of the
/// window.
pub fn parse_window_date(raw: &str, end_of_day: bool) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let time = if end_of_day {
            date.and_hms_milli_opt(23, 59, 59, 999)
        } else {
            date.and_hms_opt(0, 0, 0)
        };
        if let Some(naive) = time {
            return Ok(naive.and_utc());
        }
    }
    Err(ApiError::validation("Invalid date filter"))
}

impl OrderFilter {
    pub fn from_query(query: &OrderListQuery) -> Result<Self, ApiError> {
        let status = match query.status.as_deref() {
            Some(raw) => Some(
                raw.parse::<OrderStatus>()
                    .map_err(|_| ApiError::validation("Invalid status filter"))?,
            ),
            None => None,
        };

        let sort_column = sort_column(query.sort_by.as_deref().unwrap_or("createdAt"))?;
        let sort_dir = match query.sort_dir.as_deref() {
            None => SortDir::Desc,
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "asc" => SortDir::Asc,
                "desc" => SortDir::Desc,
                _ => return Err(ApiError::validation("Invalid sort direction")),
            },
        };

        let date_from = query
            .date_from
            .as_deref()
            .map(|raw| parse_window_date(raw, false))
            .transpose()?;
        let date_to = query
            .date_to
            .as_deref()
            .map(|raw| parse_window_date(raw, true))
            .transpose()?;

        Ok(Self {
            page: query.page.unwrap_or(1).max(1),
            limit: query.limit.unwrap_or(10).clamp(1, 100),
            status,
            service_type_id: query.service_type_id,
            search: query.search.clone(),
            sort_column,
            sort_dir,
            date_from,
            date_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> OrderListQuery {
        OrderListQuery::default()
    }

    #[test]
    fn test_defaults() {
        let filter = OrderFilter::from_query(&query()).unwrap();
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.sort_column, "created_at");
        assert_eq!(filter.sort_dir, SortDir::Desc);
        assert!(filter.status.is_none());
    }

    #[test]
    fn test_pagination_bounds() {
        let mut q = query();
        q.page = Some(-3);
        q.limit = Some(10_000);
        let filter = OrderFilter::from_query(&q).unwrap();
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 100);
    }

    #[test]
    fn test_sort_whitelist() {
        for (key, column) in [
            ("createdAt", "created_at"),
            ("updatedAt", "updated_at"),
            ("orderCode", "order_code"),
            ("totalAmount", "total_amount"),
            ("weight", "weight"),
            ("status", "status"),
        ] {
            let mut q = query();
            q.sort_by = Some(key.to_string());
            assert_eq!(OrderFilter::from_query(&q).unwrap().sort_column, column);
        }

        let mut q = query();
        q.sort_by = Some("created_at; DROP TABLE orders".to_string());
        assert!(matches!(
            OrderFilter::from_query(&q),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_sort_direction() {
        let mut q = query();
        q.sort_dir = Some("ASC".to_string());
        assert_eq!(OrderFilter::from_query(&q).unwrap().sort_dir, SortDir::Asc);

        q.sort_dir = Some("sideways".to_string());
        assert!(OrderFilter::from_query(&q).is_err());
    }

    #[test]
    fn test_status_filter_strict() {
        let mut q = query();
        q.status = Some("shipping".to_string());
        assert_eq!(
            OrderFilter::from_query(&q).unwrap().status,
            Some(OrderStatus::Shipping)
        );

        q.status = Some("shipped".to_string());
        assert!(OrderFilter::from_query(&q).is_err());
    }

    #[test]
    fn test_date_parsing() {
        let mut q = query();
        q.date_from = Some("2026-01-15".to_string());
        q.date_to = Some("2026-01-15".to_string());
        let filter = OrderFilter::from_query(&q).unwrap();
        let from = filter.date_from.unwrap();
        let to = filter.date_to.unwrap();
        assert!(from < to);
        assert_eq!(from.to_rfc3339(), "2026-01-15T00:00:00+00:00");

        q.date_from = Some("2026-01-15T08:30:00Z".to_string());
        assert!(OrderFilter::from_query(&q).is_ok());

        q.date_from = Some("yesterday".to_string());
        assert!(OrderFilter::from_query(&q).is_err());
    }
}
