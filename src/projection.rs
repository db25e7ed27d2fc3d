//! Projection of raw API objects into display rows.
//!
//! Each function returns the fields in the order of the kind's columns in
//! [`crate::types::ResourceKind::columns`].

use chrono::{DateTime, Utc};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{ConfigMap, Node, Pod, Secret, Service};
use std::collections::BTreeMap;

use crate::kubernetes::ResourceList;
use crate::types::DisplayRow;
use crate::utils::age_of;

const NONE: &str = "<none>";

// Replica count the API server assigns when a deployment omits one.
const DEFAULT_REPLICAS: i32 = 1;

const ROLE_LABEL: &str = "kubernetes.io/role";
const MASTER_LABEL: &str = "node-role.kubernetes.io/master";
const CONTROL_PLANE_LABEL: &str = "node-role.kubernetes.io/control-plane";

impl ResourceList {
    /// Project every item, computing ages against a single `now`.
    pub fn rows(&self, now: DateTime<Utc>) -> Vec<DisplayRow> {
        match self {
            Self::Pods(items) => items.iter().map(|p| pod_row(p, now)).collect(),
            Self::Deployments(items) => items.iter().map(|d| deployment_row(d, now)).collect(),
            Self::Services(items) => items.iter().map(|s| service_row(s, now)).collect(),
            Self::ConfigMaps(items) => items.iter().map(|c| configmap_row(c, now)).collect(),
            Self::Secrets(items) => items.iter().map(|s| secret_row(s, now)).collect(),
            Self::Nodes(items) => items.iter().map(|n| node_row(n, now)).collect(),
        }
    }
}

pub fn pod_row(pod: &Pod, now: DateTime<Utc>) -> DisplayRow {
    let status = pod.status.as_ref();
    let phase = status.and_then(|s| s.phase.clone()).unwrap_or_default();
    let statuses = status
        .and_then(|s| s.container_statuses.as_deref())
        .unwrap_or_default();

    let ready = statuses.iter().filter(|cs| cs.ready).count();
    let total = pod.spec.as_ref().map_or(0, |spec| spec.containers.len());
    let restarts: i64 = statuses.iter().map(|cs| i64::from(cs.restart_count)).sum();

    vec![
        pod.metadata.name.clone().unwrap_or_default(),
        phase,
        format!("{}/{}", ready, total),
        restarts.to_string(),
        age_of(pod.metadata.creation_timestamp.as_ref(), now),
    ]
}

pub fn deployment_row(deployment: &Deployment, now: DateTime<Utc>) -> DisplayRow {
    let desired = deployment
        .spec
        .as_ref()
        .and_then(|spec| spec.replicas)
        .unwrap_or(DEFAULT_REPLICAS);
    let status = deployment.status.as_ref();
    let ready = status.and_then(|s| s.ready_replicas).unwrap_or(0);
    let updated = status.and_then(|s| s.updated_replicas).unwrap_or(0);
    let available = status.and_then(|s| s.available_replicas).unwrap_or(0);

    vec![
        deployment.metadata.name.clone().unwrap_or_default(),
        format!("{}/{}", ready, desired),
        updated.to_string(),
        available.to_string(),
        age_of(deployment.metadata.creation_timestamp.as_ref(), now),
    ]
}

pub fn service_row(service: &Service, now: DateTime<Utc>) -> DisplayRow {
    let spec = service.spec.as_ref();

    vec![
        service.metadata.name.clone().unwrap_or_default(),
        spec.and_then(|s| s.type_.clone()).unwrap_or_default(),
        spec.and_then(|s| s.cluster_ip.clone()).unwrap_or_default(),
        external_ip(service),
        age_of(service.metadata.creation_timestamp.as_ref(), now),
    ]
}

/// First load balancer ingress address, preferring the IP over the hostname.
pub fn external_ip(service: &Service) -> String {
    let first = service
        .status
        .as_ref()
        .and_then(|s| s.load_balancer.as_ref())
        .and_then(|lb| lb.ingress.as_ref())
        .and_then(|ingress| ingress.first());

    let Some(ingress) = first else {
        return NONE.to_string();
    };

    [ingress.ip.as_deref(), ingress.hostname.as_deref()]
        .into_iter()
        .flatten()
        .find(|addr| !addr.is_empty())
        .unwrap_or(NONE)
        .to_string()
}

pub fn configmap_row(configmap: &ConfigMap, now: DateTime<Utc>) -> DisplayRow {
    let entries = configmap.data.as_ref().map_or(0, BTreeMap::len);

    vec![
        configmap.metadata.name.clone().unwrap_or_default(),
        entries.to_string(),
        age_of(configmap.metadata.creation_timestamp.as_ref(), now),
    ]
}

pub fn secret_row(secret: &Secret, now: DateTime<Utc>) -> DisplayRow {
    let entries = secret.data.as_ref().map_or(0, BTreeMap::len);

    vec![
        secret.metadata.name.clone().unwrap_or_default(),
        secret.type_.clone().unwrap_or_default(),
        entries.to_string(),
        age_of(secret.metadata.creation_timestamp.as_ref(), now),
    ]
}

pub fn node_row(node: &Node, now: DateTime<Utc>) -> DisplayRow {
    let version = node
        .status
        .as_ref()
        .and_then(|s| s.node_info.as_ref())
        .map(|info| info.kubelet_version.clone())
        .unwrap_or_default();

    vec![
        node.metadata.name.clone().unwrap_or_default(),
        node_status(node).to_string(),
        node_roles(node),
        version,
        age_of(node.metadata.creation_timestamp.as_ref(), now),
    ]
}

/// "NotReady" only when the first Ready condition reports something other
/// than "True". A node with no Ready condition at all is shown as "Ready".
pub fn node_status(node: &Node) -> &'static str {
    let ready = node
        .status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .and_then(|conditions| conditions.iter().find(|c| c.type_ == "Ready"));

    match ready {
        Some(condition) if condition.status != "True" => "NotReady",
        _ => "Ready",
    }
}

/// Role from node labels. An explicit role label wins over the
/// master/control-plane markers.
pub fn node_roles(node: &Node) -> String {
    let Some(labels) = node.metadata.labels.as_ref() else {
        return NONE.to_string();
    };
    let is_true = |key: &str| labels.get(key).is_some_and(|v| v == "true");

    if let Some(role) = labels.get(ROLE_LABEL) {
        role.clone()
    } else if is_true(MASTER_LABEL) {
        "master".to_string()
    } else if is_true(CONTROL_PLANE_LABEL) {
        "control-plane".to_string()
    } else {
        NONE.to_string()
    }
}
