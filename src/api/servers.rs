use crate::transport::Request;
use crate::{
    CreateServer, Error, FractalItem, FractalList, Server, ServerInclude, UpdateServerBuild,
    UpdateServerDetails, UpdateServerStartup,
};

/// Game server administration.
///
/// Server mutation is segmented the way the panel segments it: `details`,
/// `build` and `startup` are independently patchable sections.
#[derive(Clone)]
pub struct ServersService {
    client: crate::Client,
}

impl ServersService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /servers`
    pub async fn list(&self, include: Option<ServerInclude>) -> Result<FractalList<Server>, Error> {
        let req = Request::get(["servers"]).include(include.map(ServerInclude::as_str));
        self.client.send_json(req).await
    }

    /// `GET /servers/{id}`
    pub async fn get(
        &self,
        id: u32,
        include: Option<ServerInclude>,
    ) -> Result<FractalItem<Server>, Error> {
        let req = Request::get(["servers".into(), id.to_string()])
            .include(include.map(ServerInclude::as_str));
        self.client.send_json(req).await
    }

    /// `GET /servers/external/{external_id}`
    pub async fn get_by_external_id(
        &self,
        external_id: &str,
        include: Option<ServerInclude>,
    ) -> Result<FractalItem<Server>, Error> {
        let req = Request::get(["servers", "external", external_id])
            .include(include.map(ServerInclude::as_str));
        self.client.send_json(req).await
    }

    /// `POST /servers`
    pub async fn create(&self, payload: &CreateServer) -> Result<FractalItem<Server>, Error> {
        let req = Request::post(["servers"]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `PATCH /servers/{id}/details`
    pub async fn update_details(
        &self,
        id: u32,
        payload: &UpdateServerDetails,
    ) -> Result<FractalItem<Server>, Error> {
        let req =
            Request::patch(["servers".into(), id.to_string(), "details".into()]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `PATCH /servers/{id}/build`
    pub async fn update_build(
        &self,
        id: u32,
        payload: &UpdateServerBuild,
    ) -> Result<FractalItem<Server>, Error> {
        let req =
            Request::patch(["servers".into(), id.to_string(), "build".into()]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `PATCH /servers/{id}/startup`
    pub async fn update_startup(
        &self,
        id: u32,
        payload: &UpdateServerStartup,
    ) -> Result<FractalItem<Server>, Error> {
        let req =
            Request::patch(["servers".into(), id.to_string(), "startup".into()]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `DELETE /servers/{id}`
    pub async fn delete(&self, id: u32) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["servers".into(), id.to_string()]))
            .await
    }
}
