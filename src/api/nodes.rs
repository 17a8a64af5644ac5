use crate::transport::Request;
use crate::{
    CreateNode, Error, FractalItem, FractalList, Node, NodeConfiguration, NodeInclude, UpdateNode,
};

/// Daemon node administration.
#[derive(Clone)]
pub struct NodesService {
    client: crate::Client,
}

impl NodesService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /nodes`
    pub async fn list(&self, include: Option<NodeInclude>) -> Result<FractalList<Node>, Error> {
        let req = Request::get(["nodes"]).include(include.map(NodeInclude::as_str));
        self.client.send_json(req).await
    }

    /// `GET /nodes/{id}`
    pub async fn get(
        &self,
        id: u32,
        include: Option<NodeInclude>,
    ) -> Result<FractalItem<Node>, Error> {
        let req =
            Request::get(["nodes".into(), id.to_string()]).include(include.map(NodeInclude::as_str));
        self.client.send_json(req).await
    }

    /// `GET /nodes/{id}/configuration`
    ///
    /// Returns the wings configuration document for the node, un-enveloped.
    pub async fn configuration(&self, id: u32) -> Result<NodeConfiguration, Error> {
        self.client
            .send_json(Request::get([
                "nodes".into(),
                id.to_string(),
                "configuration".into(),
            ]))
            .await
    }

    /// `POST /nodes`
    pub async fn create(&self, payload: &CreateNode) -> Result<FractalItem<Node>, Error> {
        let req = Request::post(["nodes"]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `PATCH /nodes/{id}`
    pub async fn update(&self, id: u32, payload: &UpdateNode) -> Result<FractalItem<Node>, Error> {
        let req = Request::patch(["nodes".into(), id.to_string()]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `DELETE /nodes/{id}`
    pub async fn delete(&self, id: u32) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["nodes".into(), id.to_string()]))
            .await
    }
}
