use clap::Parser;
use rustdis_streams::commands::{XgroupCreate, Xread, Xreadgroup};
use rustdis_streams::stream::StreamEntry;
use rustdis_streams::{BoxError, Client, Error};
use tracing::{debug, info};
use uuid::Uuid;

/// Follows a stream and logs every new entry.
#[derive(Parser, Debug)]
struct Args {
    /// Redis connection url
    #[arg(short, long, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379/")]
    url: String,

    /// The stream to follow
    #[arg(short, long, env = "XTAIL_STREAM")]
    stream: String,

    /// Read through this consumer group, acknowledging every entry
    #[arg(short, long)]
    group: Option<String>,

    /// Consumer name within the group, random when not set
    #[arg(short, long)]
    consumer: Option<String>,

    /// Maximum number of entries per read
    #[arg(long, default_value_t = 100)]
    count: u64,

    /// How long a read blocks waiting for entries, in milliseconds
    #[arg(long, default_value_t = 5000)]
    block: u64,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let _ = tracing_subscriber::fmt()
        .try_init()
        .map_err(|e| debug!("Failed to initialize global tracing: {}", e));

    let args = Args::parse();

    let conn = redis::Client::open(args.url.as_str())?
        .get_multiplexed_async_connection()
        .await?;
    let mut client = Client::new(conn);

    info!("Following stream {}", args.stream);

    match args.group.clone() {
        Some(group) => {
            let consumer = args
                .consumer
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            follow_group(&mut client, &args, group, consumer).await
        }
        None => follow(&mut client, &args).await,
    }
}

async fn follow(
    client: &mut Client<redis::aio::MultiplexedConnection>,
    args: &Args,
) -> Result<(), BoxError> {
    let mut last_id = String::from("$");

    loop {
        let request = Xread::new()
            .stream(&args.stream, &last_id)
            .count(args.count)
            .block(args.block);
        let reply = client.xread(request).await?;

        if let Some(entries) = reply.get(&args.stream) {
            for entry in entries {
                log_entry(entry);
            }
            if let Some(entry) = entries.last() {
                last_id = entry.id.clone();
            }
        }
    }
}

async fn follow_group(
    client: &mut Client<redis::aio::MultiplexedConnection>,
    args: &Args,
    group: String,
    consumer: String,
) -> Result<(), BoxError> {
    let create = XgroupCreate::new(&args.stream, &group).id("$").mkstream();
    match client.xgroup_create(create).await {
        Ok(_) => info!("Created group {}", group),
        Err(Error::Redis(message)) if message.starts_with("BUSYGROUP") => {
            debug!("Group {} already exists", group)
        }
        Err(e) => return Err(e.into()),
    }

    info!("Reading as consumer {} of group {}", consumer, group);

    loop {
        let request = Xreadgroup::new(&group, &consumer)
            .stream(&args.stream, ">")
            .count(args.count)
            .block(args.block);
        let reply = client.xreadgroup(request).await?;

        let Some(entries) = reply.get(&args.stream) else {
            continue;
        };
        for entry in entries {
            log_entry(entry);
        }

        let ids = entries.iter().map(|entry| entry.id.clone());
        let acked = client.xack(&args.stream, &group, ids).await?;
        debug!("Acknowledged {} entries", acked);
    }
}

fn log_entry(entry: &StreamEntry) {
    let fields: Vec<String> = entry
        .fields
        .iter()
        .map(|(field, value)| format!("{}={}", field, value))
        .collect();
    info!("{} {}", entry.id, fields.join(" "));
}
