use chrono::{DateTime, Utc};

use super::RealRuntime;

impl RealRuntime {
    pub(crate) fn now_impl(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
