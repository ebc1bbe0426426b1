//! mpdlink CLI
//!
//! Command-line interface for talking to an MPD server.

use clap::{Parser, Subcommand};
use mpdlink::{Client, Item, Reply};
use tracing_subscriber::{fmt, EnvFilter};

/// mpdlink CLI
#[derive(Parser, Debug)]
#[command(name = "mpdlink")]
#[command(about = "Control an MPD server from the command line")]
#[command(version)]
struct Args {
    /// Server address: [password@]host[:port] or a socket path
    #[arg(short, long, env = "MPD_HOST", default_value = "localhost")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the server status
    Status,

    /// Read one status attribute
    Get {
        /// Attribute name (volume, repeat, state, ...)
        attribute: String,
    },

    /// Write one status attribute
    Set {
        /// Attribute name (volume, repeat, crossfade, ...)
        attribute: String,

        /// New value
        value: String,
    },

    /// Run a registered command by name (current_song, play, ...)
    Call {
        /// Command name
        name: String,

        /// Positional arguments
        args: Vec<String>,
    },

    /// Wait for a subsystem change
    Idle {
        /// Subsystems to wait for (any, if empty)
        subsystems: Vec<String>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mpdlink=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut client = match Client::open(&args.server) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to connect to {}: {}", args.server, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&mut client, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    if let Some(ack) = client.last_error() {
        eprintln!("server error: {}", ack);
        std::process::exit(2);
    }
}

fn run(client: &mut Client, command: Commands) -> mpdlink::Result<()> {
    match command {
        Commands::Status => {
            let mut fields: Vec<_> = client.status().iter().collect();
            fields.sort();
            for (key, value) in fields {
                println!("{}: {}", key, value);
            }
        }
        Commands::Get { attribute } => {
            if let Some(value) = client.attribute(&attribute)? {
                println!("{}", value);
            }
        }
        Commands::Set { attribute, value } => {
            if let Some(value) = client.set_attribute(&attribute, &value)? {
                println!("{}", value);
            }
        }
        Commands::Call { name, args } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            print_reply(client.call(&name, &args)?);
        }
        Commands::Idle { subsystems } => {
            let subsystems: Vec<&str> = subsystems.iter().map(String::as_str).collect();
            for changed in client.idle(&subsystems)? {
                println!("{}", changed);
            }
        }
    }
    Ok(())
}

fn print_reply(reply: Reply) {
    let many = matches!(reply, Reply::Many(_));
    for item in reply.into_items() {
        match item {
            Item::Value(value) => println!("{}", value),
            Item::Record(record) => {
                for (key, value) in record.iter() {
                    println!("{}: {}", key, value);
                }
                if many {
                    println!();
                }
            }
        }
    }
}
