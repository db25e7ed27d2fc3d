use anyhow::Context;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{ConfigMap, Node, Pod, Secret, Service};
use kube::api::ListParams;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, Config};
use std::path::Path;
use tracing::{debug, info};

use crate::types::ResourceKind;

/// Items returned by a single list call, tagged by kind.
#[derive(Debug, Clone)]
pub enum ResourceList {
    Pods(Vec<Pod>),
    Deployments(Vec<Deployment>),
    Services(Vec<Service>),
    ConfigMaps(Vec<ConfigMap>),
    Secrets(Vec<Secret>),
    Nodes(Vec<Node>),
}

impl ResourceList {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Pods(_) => ResourceKind::Pod,
            Self::Deployments(_) => ResourceKind::Deployment,
            Self::Services(_) => ResourceKind::Service,
            Self::ConfigMaps(_) => ResourceKind::ConfigMap,
            Self::Secrets(_) => ResourceKind::Secret,
            Self::Nodes(_) => ResourceKind::Node,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Pods(items) => items.len(),
            Self::Deployments(items) => items.len(),
            Self::Services(items) => items.len(),
            Self::ConfigMaps(items) => items.len(),
            Self::Secrets(items) => items.len(),
            Self::Nodes(items) => items.len(),
        }
    }
}

/// A failed list call.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The API server answered with a Status object.
    #[error("{message}")]
    Api { code: u16, message: String },
    /// Anything else: transport, TLS, auth plugin, decoding.
    #[error("{0:#}")]
    Other(anyhow::Error),
}

impl FetchError {
    /// Message shown to the user in place of the table.
    pub fn display_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Other(err) => format!("{err:#}"),
        }
    }
}

impl From<kube::Error> for FetchError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(status) => Self::Api {
                code: status.code,
                message: status.message,
            },
            other => Self::Other(other.into()),
        }
    }
}

/// Something that can list resources of a kind at the current instant.
pub trait ResourceSource {
    async fn fetch(&self, kind: ResourceKind, namespace: &str) -> Result<ResourceList, FetchError>;
}

/// Cluster connection built once at startup and reused by every fetch.
pub struct KubeSession {
    client: Client,
}

impl KubeSession {
    pub async fn connect(
        kubeconfig: Option<&Path>,
        context: Option<&str>,
    ) -> anyhow::Result<Self> {
        let kubeconfig = match kubeconfig {
            Some(path) => Kubeconfig::read_from(path)
                .with_context(|| format!("Failed to read kubeconfig {}", path.display()))?,
            None => {
                Kubeconfig::read().context("Failed to read kubeconfig. Is kubectl configured?")?
            }
        };

        let context_name = context
            .map(str::to_string)
            .or_else(|| kubeconfig.current_context.clone())
            .unwrap_or_else(|| "default".to_string());

        let config = Config::from_custom_kubeconfig(
            kubeconfig,
            &KubeConfigOptions {
                context: context.map(str::to_string),
                ..Default::default()
            },
        )
        .await
        .with_context(|| format!("Failed to load config for context: {}", context_name))?;

        let client = Client::try_from(config)
            .with_context(|| format!("Failed to create client for context: {}", context_name))?;
        info!("Using context: {}", context_name);

        Ok(Self { client })
    }
}

impl ResourceSource for KubeSession {
    async fn fetch(
        &self,
        kind: ResourceKind,
        namespace: &str,
    ) -> Result<ResourceList, FetchError> {
        let lp = ListParams::default();
        let client = self.client.clone();

        let list = match kind {
            ResourceKind::Pod => ResourceList::Pods(
                Api::<Pod>::namespaced(client, namespace)
                    .list(&lp)
                    .await?
                    .items,
            ),
            ResourceKind::Deployment => ResourceList::Deployments(
                Api::<Deployment>::namespaced(client, namespace)
                    .list(&lp)
                    .await?
                    .items,
            ),
            ResourceKind::Service => ResourceList::Services(
                Api::<Service>::namespaced(client, namespace)
                    .list(&lp)
                    .await?
                    .items,
            ),
            ResourceKind::ConfigMap => ResourceList::ConfigMaps(
                Api::<ConfigMap>::namespaced(client, namespace)
                    .list(&lp)
                    .await?
                    .items,
            ),
            ResourceKind::Secret => ResourceList::Secrets(
                Api::<Secret>::namespaced(client, namespace)
                    .list(&lp)
                    .await?
                    .items,
            ),
            ResourceKind::Node => {
                ResourceList::Nodes(Api::<Node>::all(client).list(&lp).await?.items)
            }
        };

        if kind.is_cluster_scoped() {
            debug!("Listed {} {}", list.len(), kind);
        } else {
            debug!("Listed {} {} in namespace {}", list.len(), kind, namespace);
        }
        Ok(list)
    }
}
