use crate::transport::Request;
use crate::{
    CreateLocation, Error, FractalItem, FractalList, Location, LocationInclude, UpdateLocation,
};

/// Location administration.
#[derive(Clone)]
pub struct LocationsService {
    client: crate::Client,
}

impl LocationsService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /locations`
    pub async fn list(
        &self,
        include: Option<LocationInclude>,
    ) -> Result<FractalList<Location>, Error> {
        let req = Request::get(["locations"]).include(include.map(LocationInclude::as_str));
        self.client.send_json(req).await
    }

    /// `GET /locations/{id}`
    pub async fn get(
        &self,
        id: u32,
        include: Option<LocationInclude>,
    ) -> Result<FractalItem<Location>, Error> {
        let req = Request::get(["locations".into(), id.to_string()])
            .include(include.map(LocationInclude::as_str));
        self.client.send_json(req).await
    }

    /// `POST /locations`
    pub async fn create(&self, payload: &CreateLocation) -> Result<FractalItem<Location>, Error> {
        let req = Request::post(["locations"]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `PATCH /locations/{id}`
    pub async fn update(
        &self,
        id: u32,
        payload: &UpdateLocation,
    ) -> Result<FractalItem<Location>, Error> {
        let req = Request::patch(["locations".into(), id.to_string()]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `DELETE /locations/{id}`
    pub async fn delete(&self, id: u32) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["locations".into(), id.to_string()]))
            .await
    }
}
