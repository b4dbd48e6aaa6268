use crate::domain::health::entities::ServiceStatus;

pub trait HealthCheckService: Send + Sync {
    fn status(&self) -> ServiceStatus;
}
