use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::cli::Cli;

/// One projected table line. Arity always matches the kind's columns.
pub type DisplayRow = Vec<String>;

/// A table column: header text and minimum field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

const fn col(header: &'static str, width: usize) -> Column {
    Column { header, width }
}

const POD_COLUMNS: &[Column] = &[
    col("NAME", 40),
    col("STATUS", 20),
    col("READY", 15),
    col("RESTARTS", 10),
    col("AGE", 10),
];

const DEPLOYMENT_COLUMNS: &[Column] = &[
    col("NAME", 40),
    col("READY", 10),
    col("UP-TO-DATE", 10),
    col("AVAILABLE", 10),
    col("AGE", 10),
];

const SERVICE_COLUMNS: &[Column] = &[
    col("NAME", 40),
    col("TYPE", 20),
    col("CLUSTER-IP", 20),
    col("EXTERNAL-IP", 15),
    col("AGE", 10),
];

const CONFIGMAP_COLUMNS: &[Column] = &[col("NAME", 40), col("DATA", 15), col("AGE", 10)];

const SECRET_COLUMNS: &[Column] = &[
    col("NAME", 40),
    col("TYPE", 15),
    col("DATA", 15),
    col("AGE", 10),
];

const NODE_COLUMNS: &[Column] = &[
    col("NAME", 40),
    col("STATUS", 15),
    col("ROLES", 15),
    col("VERSION", 20),
    col("AGE", 10),
];

/// The closed set of resource kinds that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pod,
    Deployment,
    Service,
    ConfigMap,
    Secret,
    Node,
}

impl ResourceKind {
    /// Plural lowercase name, used in the total line and the watch banner.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Pod => "pods",
            Self::Deployment => "deployments",
            Self::Service => "services",
            Self::ConfigMap => "configmaps",
            Self::Secret => "secrets",
            Self::Node => "nodes",
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            Self::Pod => POD_COLUMNS,
            Self::Deployment => DEPLOYMENT_COLUMNS,
            Self::Service => SERVICE_COLUMNS,
            Self::ConfigMap => CONFIGMAP_COLUMNS,
            Self::Secret => SECRET_COLUMNS,
            Self::Node => NODE_COLUMNS,
        }
    }

    /// Cluster-scoped kinds ignore the configured namespace.
    pub fn is_cluster_scoped(&self) -> bool {
        matches!(self, Self::Node)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported resource type: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for ResourceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pods" | "pod" => Ok(Self::Pod),
            "deployments" | "deployment" => Ok(Self::Deployment),
            "services" | "service" => Ok(Self::Service),
            "configmaps" | "configmap" => Ok(Self::ConfigMap),
            "secrets" | "secret" => Ok(Self::Secret),
            "nodes" | "node" => Ok(Self::Node),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

/// Settings for the refresh loop, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub kind: ResourceKind,
    pub namespace: String,
    pub watch: bool,
    pub interval: Duration,
}

impl RefreshConfig {
    pub fn from_cli(cli: &Cli, kind: ResourceKind) -> Self {
        Self {
            kind,
            namespace: cli.namespace.clone(),
            watch: cli.watch,
            interval: Duration::from_secs(cli.interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_singular_and_plural_names() {
        assert_eq!("pods".parse::<ResourceKind>(), Ok(ResourceKind::Pod));
        assert_eq!("pod".parse::<ResourceKind>(), Ok(ResourceKind::Pod));
        assert_eq!(
            "configmap".parse::<ResourceKind>(),
            Ok(ResourceKind::ConfigMap)
        );
        assert_eq!("nodes".parse::<ResourceKind>(), Ok(ResourceKind::Node));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let err = "ingresses".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported resource type: ingresses");
        // case-sensitive
        assert!("Pods".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn test_only_nodes_are_cluster_scoped() {
        assert!(ResourceKind::Node.is_cluster_scoped());
        assert!(!ResourceKind::Pod.is_cluster_scoped());
        assert!(!ResourceKind::Secret.is_cluster_scoped());
    }

    #[test]
    fn test_every_kind_starts_with_name_and_ends_with_age() {
        for kind in [
            ResourceKind::Pod,
            ResourceKind::Deployment,
            ResourceKind::Service,
            ResourceKind::ConfigMap,
            ResourceKind::Secret,
            ResourceKind::Node,
        ] {
            let columns = kind.columns();
            assert_eq!(columns.first().map(|c| c.header), Some("NAME"));
            assert_eq!(columns.last().map(|c| c.header), Some("AGE"));
        }
    }
}
