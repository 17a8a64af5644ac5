use crate::transport::Request;
use crate::{Allocation, AllocationInclude, CreateAllocations, Error, FractalList};

/// Allocation administration.
///
/// Allocations only exist under a node, so every method takes the owning
/// `node_id` explicitly rather than holding a per-node handle.
#[derive(Clone)]
pub struct AllocationsService {
    client: crate::Client,
}

impl AllocationsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /nodes/{node_id}/allocations`
    pub async fn list(
        &self,
        node_id: u32,
        include: Option<AllocationInclude>,
    ) -> Result<FractalList<Allocation>, Error> {
        let req = Request::get(["nodes".into(), node_id.to_string(), "allocations".into()])
            .include(include.map(AllocationInclude::as_str));
        self.client.send_json(req).await
    }

    /// `POST /nodes/{node_id}/allocations`
    ///
    /// The panel answers 204 No Content; created allocations are not echoed
    /// back.
    pub async fn create(&self, node_id: u32, payload: &CreateAllocations) -> Result<(), Error> {
        let req = Request::post(["nodes".into(), node_id.to_string(), "allocations".into()])
            .json(payload)?;
        self.client.send_unit(req).await
    }

    /// `DELETE /nodes/{node_id}/allocations/{allocation_id}`
    pub async fn delete(&self, node_id: u32, allocation_id: u32) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete([
                "nodes".into(),
                node_id.to_string(),
                "allocations".into(),
                allocation_id.to_string(),
            ]))
            .await
    }
}
