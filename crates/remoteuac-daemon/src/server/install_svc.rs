//! `InstallRequestService` gRPC implementation.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::instrument;

use remoteuac_core::InstallStatus;
use remoteuac_proto::v1::install_request_service_server::InstallRequestService;
use remoteuac_proto::v1::{
    CreateRequestMessage, DecideRequest, GetStatusRequest, InstallRequestRecord,
    InstallStatus as InstallStatusProto,
};

use crate::lifecycle::{LifecycleEngine, LifecycleError};
use crate::storage::{InstallRequestRow, NewInstallRequest};

/// gRPC surface over the lifecycle engine.
pub struct InstallRequestServiceImpl {
    engine: Arc<LifecycleEngine>,
}

impl InstallRequestServiceImpl {
    /// Create a new service over the given engine.
    pub fn new(engine: Arc<LifecycleEngine>) -> Self {
        Self { engine }
    }
}

#[tonic::async_trait]
impl InstallRequestService for InstallRequestServiceImpl {
    #[instrument(skip(self, request), fields(rpc = "CreateRequest"))]
    async fn create_request(
        &self,
        request: Request<CreateRequestMessage>,
    ) -> Result<Response<InstallRequestRecord>, Status> {
        let req = request.into_inner();

        let new_request = NewInstallRequest {
            device_id: req.device_id,
            app_name: req.app_name,
            size: req.size,
            path: req.path,
            download_source: req.download_source,
            requested_changes: req.requested_changes_json,
            device_timestamp: req.device_timestamp,
        };

        let row = self
            .engine
            .create(&new_request)
            .await
            .map_err(into_status)?;
        to_record(&row).map(Response::new)
    }

    #[instrument(skip(self, request), fields(rpc = "GetStatus"))]
    async fn get_status(
        &self,
        request: Request<GetStatusRequest>,
    ) -> Result<Response<InstallRequestRecord>, Status> {
        let req = request.into_inner();
        let row = self.engine.get_status(req.id).await.map_err(into_status)?;
        to_record(&row).map(Response::new)
    }

    #[instrument(skip(self, request), fields(rpc = "Decide"))]
    async fn decide(
        &self,
        request: Request<DecideRequest>,
    ) -> Result<Response<InstallRequestRecord>, Status> {
        let credential = bearer_credential(&request);
        let req = request.into_inner();

        let row = self
            .engine
            .decide(req.id, req.approve, &credential)
            .await
            .map_err(into_status)?;
        to_record(&row).map(Response::new)
    }
}

/// Raw value of the `authorization` request metadata, or empty.
///
/// The engine strips the optional "Bearer " scheme marker; a missing header
/// fails authorization the same way an invalid credential does.
fn bearer_credential<T>(request: &Request<T>) -> String {
    request
        .metadata()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Map lifecycle failures onto gRPC status codes.
///
/// `Unauthorized` always renders the same fixed message, so callers cannot
/// distinguish a malformed credential from an expired or wrong-principal one.
fn into_status(err: LifecycleError) -> Status {
    match err {
        LifecycleError::NotFound { id } => {
            Status::not_found(format!("Install request not found: {id}"))
        }
        LifecycleError::Unauthorized => Status::unauthenticated("Unauthorized"),
        LifecycleError::AlreadyDecided { .. } => Status::failed_precondition(err.to_string()),
        LifecycleError::Storage(e) => Status::internal(format!("Storage failure: {e}")),
    }
}

/// Convert a stored row into its wire representation.
fn to_record(row: &InstallRequestRow) -> Result<InstallRequestRecord, Status> {
    let status = match row.status() {
        Ok(InstallStatus::Pending) => InstallStatusProto::Pending,
        Ok(InstallStatus::Approved) => InstallStatusProto::Approved,
        Ok(InstallStatus::Denied) => InstallStatusProto::Denied,
        Err(e) => return Err(Status::internal(format!("Corrupt status column: {e}"))),
    };

    Ok(InstallRequestRecord {
        id: row.id,
        device_id: row.device_id.clone(),
        app_name: row.app_name.clone(),
        size: row.size.clone(),
        path: row.path.clone(),
        download_source: row.download_source.clone(),
        requested_changes_json: row.requested_changes.clone(),
        device_timestamp: row.device_timestamp,
        created_at: row.created_at,
        status: status.into(),
        decided_at: row.decided_at.unwrap_or(0),
    })
}
