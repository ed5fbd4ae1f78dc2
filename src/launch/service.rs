use futures::stream::{self, Stream, TryStreamExt};
use tracing::info;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::filtering::{FilterOption, Paging};
use crate::http::{ApiTransport, Endpoint, HttpMethod, HttpRequest, ReqBody};
use crate::launch::model::{FinishedLaunch, Launch, OperationMessage, Page, StartedLaunch};
use crate::launch::requests::{
    AnalyzeLaunchRequest, FinishLaunchRequest, MergeLaunchesRequest, StartLaunchRequest,
    UpdateLaunchRequest,
};

const DEFAULT_STREAM_PAGE_SIZE: u32 = 50;

/// Launch lifecycle operations for one project.
///
/// Every call is one stateless request/response round trip; the service is
/// the only arbiter of lifecycle transitions. Concurrent calls against the
/// same launch are resolved remotely, not serialized here.
#[derive(Clone)]
pub struct LaunchService {
    transport: ApiTransport,
    project: String,
}

impl LaunchService {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ApiTransport::new(&config)?;
        Ok(Self {
            transport,
            project: config.project,
        })
    }

    fn launch_path(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            format!("api/v1/{}/launch", self.project)
        } else {
            format!("api/v1/{}/launch/{}", self.project, suffix)
        }
    }

    async fn get_page(
        &self,
        suffix: &str,
        filter: Option<&FilterOption>,
    ) -> Result<Page<Launch>, ClientError> {
        let params = filter.map(FilterOption::to_query_params).unwrap_or_default();
        let endpoint = Endpoint::new(HttpMethod::GET, self.launch_path(suffix), params);
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::empty()))
            .await
    }

    /// Launches of the project; without a filter the service applies its
    /// default paging and sort.
    pub async fn list(&self, filter: Option<&FilterOption>) -> Result<Page<Launch>, ClientError> {
        self.get_page("", filter).await
    }

    /// Launches reported in debug mode only.
    pub async fn list_debug(
        &self,
        filter: Option<&FilterOption>,
    ) -> Result<Page<Launch>, ClientError> {
        self.get_page("mode", filter).await
    }

    pub async fn get_by_uuid(&self, uuid: &str) -> Result<Launch, ClientError> {
        let endpoint = Endpoint::new(
            HttpMethod::GET,
            self.launch_path(&format!("uuid/{uuid}")),
            vec![],
        );
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::empty()))
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Launch, ClientError> {
        let endpoint = Endpoint::new(HttpMethod::GET, self.launch_path(&id.to_string()), vec![]);
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::empty()))
            .await
    }

    /// Starts a launch. With `rerun` set, the service resolves the request
    /// to an existing launch by name (and `rerun_of` when given) and returns
    /// that launch's identity instead of minting a new one; without a match
    /// the start is rejected.
    pub async fn start(&self, request: &StartLaunchRequest) -> Result<StartedLaunch, ClientError> {
        info!("starting launch '{}'", request.name);
        let endpoint = Endpoint::new(HttpMethod::POST, self.launch_path(""), vec![]);
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::json(request)?))
            .await
    }

    /// Finishes an in-progress launch. A launch finishes at most once; the
    /// service rejects a repeat, including on a uuid reused through rerun
    /// matching.
    pub async fn finish(
        &self,
        uuid: &str,
        request: &FinishLaunchRequest,
    ) -> Result<FinishedLaunch, ClientError> {
        info!("finishing launch '{uuid}'");
        let endpoint = Endpoint::new(
            HttpMethod::PUT,
            self.launch_path(&format!("{uuid}/finish")),
            vec![],
        );
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::json(request)?))
            .await
    }

    /// Force-finishes a launch that may still have running child items.
    pub async fn stop(
        &self,
        id: i64,
        request: &FinishLaunchRequest,
    ) -> Result<OperationMessage, ClientError> {
        info!("stopping launch {id}");
        let endpoint = Endpoint::new(
            HttpMethod::PUT,
            self.launch_path(&format!("{id}/stop")),
            vec![],
        );
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::json(request)?))
            .await
    }

    /// Partial update; works on in-progress and finished launches alike.
    pub async fn update(
        &self,
        id: i64,
        request: &UpdateLaunchRequest,
    ) -> Result<OperationMessage, ClientError> {
        let endpoint = Endpoint::new(
            HttpMethod::PUT,
            self.launch_path(&format!("{id}/update")),
            vec![],
        );
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::json(request)?))
            .await
    }

    /// Merges at least two finished launches into a new one carrying the
    /// request's start and end times verbatim.
    pub async fn merge(&self, request: &MergeLaunchesRequest) -> Result<Launch, ClientError> {
        info!("merging {} launches into '{}'", request.launches.len(), request.name);
        let endpoint = Endpoint::new(HttpMethod::POST, self.launch_path("merge"), vec![]);
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::json(request)?))
            .await
    }

    /// Triggers server-side analysis. The analysis itself runs
    /// asynchronously; only the trigger is acknowledged here.
    pub async fn analyze(
        &self,
        request: &AnalyzeLaunchRequest,
    ) -> Result<OperationMessage, ClientError> {
        let endpoint = Endpoint::new(HttpMethod::POST, self.launch_path("analyze"), vec![]);
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::json(request)?))
            .await
    }

    /// Deletes a launch. The id stops resolving afterwards, so a repeat
    /// delete is a remote rejection.
    pub async fn delete(&self, id: i64) -> Result<OperationMessage, ClientError> {
        info!("deleting launch {id}");
        let endpoint = Endpoint::new(HttpMethod::DELETE, self.launch_path(&id.to_string()), vec![]);
        self.transport
            .execute(HttpRequest::new(endpoint, ReqBody::empty()))
            .await
    }

    /// Walks list pages starting from the filter's page, yielding launches
    /// in listing order until the last page.
    pub fn stream_all(
        &self,
        filter: FilterOption,
    ) -> impl Stream<Item = Result<Launch, ClientError>> + '_ {
        let page_size = filter.paging.map_or(DEFAULT_STREAM_PAGE_SIZE, |p| p.size);
        let first_page = filter.paging.map_or(1, |p| p.number);
        stream::try_unfold(
            (first_page, false, filter),
            move |(page_number, done, mut filter)| async move {
                if done {
                    return Ok::<_, ClientError>(None);
                }
                filter.paging = Some(Paging::new(page_number, page_size));
                let page = self.list(Some(&filter)).await?;
                if page.content.is_empty() {
                    return Ok(None);
                }
                let last = page_number >= page.page.total_pages;
                Ok(Some((page.content, (page_number + 1, last, filter))))
            },
        )
        .map_ok(|launches| stream::iter(launches.into_iter().map(Ok)))
        .try_flatten()
    }
}
