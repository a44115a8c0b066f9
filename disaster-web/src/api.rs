//! Browser implementation of [`GameApi`] over `gloo-net`.
use async_trait::async_trait;
use disaster_core::bag::BagSubmission;
use disaster_core::{
    ApiError, ClientConfig, CreateRoomRequest, Endpoint, GameApi, HostInfo, JoinRequest,
    JoinResponse, PhaseReport, RoomCreated, SubmitResponse, TeamList,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// JSON client for the game backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get<T>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(response).await
    }

    async fn post<B, T>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base);
        let response = Request::post(&url)
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(response).await
    }
}

/// Non-2xx statuses are errors regardless of the body.
async fn decode<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl GameApi for HttpApi {
    async fn create_room(&self, request: &CreateRoomRequest) -> Result<RoomCreated, ApiError> {
        self.post(Endpoint::CreateRoom, request).await
    }

    async fn room_host(&self, code: &str) -> Result<HostInfo, ApiError> {
        self.get(Endpoint::RoomHost { code }).await
    }

    async fn join_room(&self, code: &str, request: &JoinRequest) -> Result<JoinResponse, ApiError> {
        self.post(Endpoint::Join { code }, request).await
    }

    async fn teams(&self, code: &str) -> Result<TeamList, ApiError> {
        self.get(Endpoint::Teams { code }).await
    }

    async fn join_confirmed(&self, code: &str) -> Result<PhaseReport, ApiError> {
        self.get(Endpoint::JoinConfirmed { code }).await
    }

    async fn game_info_confirmed(&self, code: &str) -> Result<PhaseReport, ApiError> {
        self.get(Endpoint::GameInfoConfirmed { code }).await
    }

    async fn submit_bag(
        &self,
        code: &str,
        team: &str,
        submission: &BagSubmission,
    ) -> Result<SubmitResponse, ApiError> {
        self.post(Endpoint::SubmitBag { code, team }, submission).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_takes_base_from_config() {
        let config = ClientConfig::default().with_api_base(Some("https://game.example/"));
        let api = HttpApi::from_config(&config);
        assert_eq!(api.base(), "https://game.example");
    }
}
