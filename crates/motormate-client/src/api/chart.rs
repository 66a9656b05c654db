//! Dashboard chart endpoints

use std::sync::Arc;

use crate::constants::api_path;
use crate::error::Result;
use crate::http::MotormateHttpClient;
use crate::model::{ChartTotal, DailyViews, MonthlyRevenue, TopUser};

#[derive(Clone)]
pub struct ChartApi {
    http: Arc<MotormateHttpClient>,
}

impl ChartApi {
    pub fn new(http: Arc<MotormateHttpClient>) -> Self {
        Self { http }
    }

    pub async fn total_vehicles(&self) -> Result<ChartTotal> {
        self.http.get_json(api_path::CHART_TOTAL_VEHICLES, None).await
    }

    pub async fn total_views(&self) -> Result<ChartTotal> {
        self.http.get_json(api_path::CHART_TOTAL_VIEWS, None).await
    }

    pub async fn total_users(&self) -> Result<ChartTotal> {
        self.http.get_json(api_path::CHART_TOTAL_USERS, None).await
    }

    pub async fn total_profit(&self) -> Result<ChartTotal> {
        self.http.get_json(api_path::CHART_TOTAL_PROFITS, None).await
    }

    pub async fn top_lessees(&self) -> Result<Vec<TopUser>> {
        self.http.get_json(api_path::CHART_TOP_LESSEES, None).await
    }

    pub async fn top_lessors(&self) -> Result<Vec<TopUser>> {
        self.http.get_json(api_path::CHART_TOP_LESSORS, None).await
    }

    /// Revenue per month of one year
    pub async fn revenue_in_year(&self, year: i32) -> Result<Vec<MonthlyRevenue>> {
        self.http
            .get_json(&format!("{}/{}", api_path::CHART_REVENUE, year), None)
            .await
    }

    /// Views per day of one month
    pub async fn total_views_of_month(&self, year: i32, month: u32) -> Result<Vec<DailyViews>> {
        self.http
            .get_json(
                &format!("{}/{}/{}", api_path::CHART_TOTAL_VIEWS, year, month),
                None,
            )
            .await
    }
}
