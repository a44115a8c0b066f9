//! Live backend access for smoke scenarios.
use async_trait::async_trait;
use disaster_core::bag::BagSubmission;
use disaster_core::{
    ApiError, CreateRoomRequest, Endpoint, GameApi, HostInfo, JoinRequest, JoinResponse,
    PhaseReport, RoomCreated, SubmitResponse, TeamList,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde::de::DeserializeOwned;

static ROOM_CODE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[A-Z0-9]{6}$").ok());

/// Whether `code` looks like a backend-issued room code.
pub fn is_room_code(code: &str) -> bool {
    ROOM_CODE.as_ref().is_some_and(|re| re.is_match(code))
}

/// [`GameApi`] over `reqwest`, for running scenarios against a real server.
#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    base: String,
}

impl ReqwestApi {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get<T>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = endpoint.url(&self.base);
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
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
        log::debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(response).await
    }
}

async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl GameApi for ReqwestApi {
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
        self.post(Endpoint::SubmitBag { code, team }, submission)
            .await
    }
}
