use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kubectl-glance")]
#[command(about = "List Kubernetes resources as plain tables, optionally refreshing on an interval")]
pub struct Cli {
    /// Path to the kubeconfig file (defaults to $KUBECONFIG or ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Context
    #[arg(long)]
    pub context: Option<String>,

    /// Namespace to list (ignored for nodes)
    #[arg(short = 'n', long, default_value = "default")]
    pub namespace: String,

    /// Resource to list (pods, deployments, services, configmaps, secrets, nodes)
    #[arg(short, long, default_value = "deployments")]
    pub resource: String,

    /// Re-list the resources every interval until interrupted
    #[arg(short, long)]
    pub watch: bool,

    /// Seconds between refreshes in watch mode
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
