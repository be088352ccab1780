use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

const LONG_ABOUT: &str = r#"
Item Registry - in-memory item CRUD service for cluster demos

Every instance keeps its own item collection in memory and stamps each
response with its hostname. Run several instances behind a load balancer to
watch requests land on different replicas.

Endpoints:
  GET    /health          Health check
  GET    /                Service info
  GET    /api/items       List items
  GET    /api/items/:id   Get item by ID
  POST   /api/items       Create item
  PUT    /api/items/:id   Update item
  DELETE /api/items/:id   Delete item

State is lost on restart and is not shared between instances.
"#;

#[derive(Parser, Debug, Clone)]
#[command(name = "item-registry")]
#[command(about = "In-memory item CRUD service that reports its hostname")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind (all interfaces by default)
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Override the hostname reported in responses
    #[arg(long, env = "INSTANCE_HOSTNAME")]
    pub hostname: Option<String>,

    /// Enable verbose output (-v)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output (-q)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output logs in JSON format
    #[arg(long, env = "ITEM_REGISTRY_LOG_JSON")]
    pub json: bool,

    /// Write logs to this file instead of stdout
    #[arg(long, env = "ITEM_REGISTRY_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub instance_name: String,
}

impl ServerConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            bind_addr: SocketAddr::new(cli.host, cli.port),
            instance_name: crate::identity::resolve_instance_name(cli.hostname.as_deref()),
        }
    }
}
