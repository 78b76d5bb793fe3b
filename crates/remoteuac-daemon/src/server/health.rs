//! `remoteuac.v1.Health` service.
//!
//! Simple liveness check clients use to verify connectivity before
//! submitting requests.

use std::pin::Pin;

use tokio_stream::Stream;
use tonic::{Request, Response, Status};

use remoteuac_proto::v1::{
    HealthCheckRequest, HealthCheckResponse, ServingStatus, health_server::Health,
};

/// Liveness service for the backend.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub const fn new() -> Self {
        Self
    }
}

#[tonic::async_trait]
impl Health for HealthService {
    type WatchStream =
        Pin<Box<dyn Stream<Item = Result<HealthCheckResponse, Status>> + Send + 'static>>;

    async fn check(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<HealthCheckResponse>, Status> {
        // If this handler runs, the backend is alive and accepting gRPC.
        Ok(Response::new(HealthCheckResponse {
            status: ServingStatus::Serving.into(),
        }))
    }

    async fn watch(
        &self,
        _request: Request<HealthCheckRequest>,
    ) -> Result<Response<Self::WatchStream>, Status> {
        Err(Status::unimplemented("Health.Watch is not supported"))
    }
}
