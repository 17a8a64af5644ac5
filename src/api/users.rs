use crate::transport::Request;
use crate::{
    CreateUser, Error, FractalItem, FractalList, UpdateUser, User, UserFilter, UserInclude,
    UserSort,
};

/// Panel user administration.
#[derive(Clone)]
pub struct UsersService {
    client: crate::Client,
}

impl UsersService {
    pub(crate) fn new(client: crate::Client) -> Self {
        Self { client }
    }

    /// `GET /users`
    ///
    /// Set filter fields become `filter[<field>]` query parameters; unset
    /// fields are omitted entirely.
    pub async fn list(
        &self,
        include: Option<UserInclude>,
        filter: Option<&UserFilter>,
        sort: Option<UserSort>,
    ) -> Result<FractalList<User>, Error> {
        let mut req = Request::get(["users"]).include(include.map(UserInclude::as_str));
        if let Some(filter) = filter {
            for (key, value) in filter.query_pairs() {
                req = req.query_pair(key, value);
            }
        }
        if let Some(sort) = sort {
            req = req.query_pair("sort", sort.as_str());
        }
        self.client.send_json(req).await
    }

    /// `GET /users/{id}`
    pub async fn get(
        &self,
        id: u32,
        include: Option<UserInclude>,
    ) -> Result<FractalItem<User>, Error> {
        let req =
            Request::get(["users".into(), id.to_string()]).include(include.map(UserInclude::as_str));
        self.client.send_json(req).await
    }

    /// `GET /users/external/{external_id}`
    pub async fn get_by_external_id(
        &self,
        external_id: &str,
        include: Option<UserInclude>,
    ) -> Result<FractalItem<User>, Error> {
        let req = Request::get(["users", "external", external_id])
            .include(include.map(UserInclude::as_str));
        self.client.send_json(req).await
    }

    /// `POST /users`
    pub async fn create(&self, payload: &CreateUser) -> Result<FractalItem<User>, Error> {
        let req = Request::post(["users"]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `PATCH /users/{id}`
    pub async fn update(&self, id: u32, payload: &UpdateUser) -> Result<FractalItem<User>, Error> {
        let req = Request::patch(["users".into(), id.to_string()]).json(payload)?;
        self.client.send_json(req).await
    }

    /// `DELETE /users/{id}`
    pub async fn delete(&self, id: u32) -> Result<(), Error> {
        self.client
            .send_unit(Request::delete(["users".into(), id.to_string()]))
            .await
    }
}
