use super::error::SpotHintaError;
use super::region::Resolution;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One price interval as published by the API.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(rename = "DateTime")]
    pub timestamp: DateTime<FixedOffset>,
    #[serde(rename = "PriceWithTax")]
    pub price: f64,
    #[serde(rename = "PriceNoTax", default, skip_serializing_if = "Option::is_none")]
    pub price_no_tax: Option<f64>,
    #[serde(rename = "Rank", default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<FixedOffset>, price: f64) -> Self {
        Self {
            timestamp,
            price,
            price_no_tax: None,
            rank: None,
        }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.timestamp.with_timezone(&Utc)
    }
}

/// Prices for the days currently published, ordered by timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceList {
    points: Vec<PricePoint>,
    resolution: Resolution,
    time_zone: Tz,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub lowest: PricePoint,
    pub highest: PricePoint,
    pub average: f64,
    pub median: f64,
}

impl PriceList {
    /// Sorts the points and drops any repeated timestamp, keeping the first.
    pub fn new(mut points: Vec<PricePoint>, resolution: Resolution, time_zone: Tz) -> Self {
        points.sort_by_key(|p| p.timestamp);

        let before = points.len();
        points.dedup_by_key(|p| p.timestamp);
        if points.len() != before {
            warn!(
                dropped = before - points.len(),
                "Dropped price points with duplicate timestamps"
            );
        }

        Self {
            points,
            resolution,
            time_zone,
        }
    }

    /// Parses the JSON array returned by the `TodayAndDayForward` endpoint.
    pub fn from_json(
        json: &str,
        time_zone: Tz,
        resolution: Resolution,
    ) -> Result<Self, SpotHintaError> {
        let points: Vec<PricePoint> = serde_json::from_str(json)?;
        Ok(Self::new(points, resolution, time_zone))
    }

    pub fn to_json(&self) -> Result<String, SpotHintaError> {
        Ok(serde_json::to_string(&self.points)?)
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// The point whose interval `[timestamp, timestamp + resolution)` contains `moment`.
    pub fn point_at(&self, moment: DateTime<Utc>) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.start() <= moment);
        let point = self.points.get(idx.checked_sub(1)?)?;
        (moment < point.start() + self.resolution.duration()).then_some(point)
    }

    pub fn price_at(&self, moment: DateTime<Utc>) -> Option<f64> {
        self.point_at(moment).map(|p| p.price)
    }

    pub fn current_point(&self) -> Option<&PricePoint> {
        self.point_at(Utc::now())
    }

    pub fn current_price(&self) -> Option<f64> {
        self.price_at(Utc::now())
    }

    /// Highest price; the earliest point wins a tie.
    pub fn highest(&self) -> Option<&PricePoint> {
        self.points
            .iter()
            .reduce(|best, p| if p.price > best.price { p } else { best })
    }

    /// Lowest price; the earliest point wins a tie.
    pub fn lowest(&self) -> Option<&PricePoint> {
        self.points
            .iter()
            .reduce(|best, p| if p.price < best.price { p } else { best })
    }

    pub fn average(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let sum: f64 = self.points.iter().map(|p| p.price).sum();
        Some(sum / self.points.len() as f64)
    }

    pub fn median(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }

        let mut values: Vec<f64> = self.points.iter().map(|p| p.price).collect();
        values.sort_by(f64::total_cmp);
        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            Some((values[mid - 1] + values[mid]) / 2.0)
        } else {
            Some(values[mid])
        }
    }

    pub fn stats(&self) -> Option<PriceStats> {
        Some(PriceStats {
            lowest: *self.lowest()?,
            highest: *self.highest()?,
            average: self.average()?,
            median: self.median()?,
        })
    }

    /// Points starting within the half-open interval `[start, end)`.
    pub fn between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.filtered(|p| start <= p.start() && p.start() < end)
    }

    /// Points whose timestamp falls on `date` in the list's time zone.
    pub fn on_date(&self, date: NaiveDate) -> Self {
        let tz = self.time_zone;
        self.filtered(|p| p.timestamp.with_timezone(&tz).date_naive() == date)
    }

    pub fn today_at(&self, now: DateTime<Utc>) -> Self {
        self.on_date(self.local_date(now))
    }

    pub fn tomorrow_at(&self, now: DateTime<Utc>) -> Self {
        match self.local_date(now).succ_opt() {
            Some(tomorrow) => self.on_date(tomorrow),
            None => self.filtered(|_| false),
        }
    }

    pub fn today(&self) -> Self {
        self.today_at(Utc::now())
    }

    pub fn tomorrow(&self) -> Self {
        self.tomorrow_at(Utc::now())
    }

    /// Number of today's intervals priced at or below the current price.
    pub fn intervals_at_or_below_current_at(&self, now: DateTime<Utc>) -> usize {
        let Some(current) = self.price_at(now) else {
            return 0;
        };
        self.today_at(now)
            .iter()
            .filter(|p| p.price <= current)
            .count()
    }

    fn local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.time_zone).date_naive()
    }

    fn filtered(&self, keep: impl Fn(&PricePoint) -> bool) -> Self {
        Self {
            points: self.points.iter().filter(|p| keep(p)).copied().collect(),
            resolution: self.resolution,
            time_zone: self.time_zone,
        }
    }
}

impl<'a> IntoIterator for &'a PriceList {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
