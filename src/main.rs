use bsign::keyfile;
use bsign::server::{Server, ServerConfig};
use clap::{value_parser, Arg, ArgAction, Command};
use log::LevelFilter;
use std::net::SocketAddr;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let app = Command::new("bsign")
        .version(clap::crate_version!())
        .about("textbook RSA signing service for blind signature protocols")
        .arg(
            Arg::new("key")
                .short('k')
                .long("key")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("to specify the private key file path"),
        )
        .arg(
            Arg::new("listen")
                .short('l')
                .long("listen")
                .action(ArgAction::Set)
                .value_parser(value_parser!(SocketAddr))
                .default_value("127.0.0.1:8080")
                .help("to specify the listen address"),
        )
        .get_matches();

    let (key, listen_addr) = (
        app.get_one::<PathBuf>("key").cloned().unwrap(),
        app.get_one::<SocketAddr>("listen").copied().unwrap(),
    );

    let key = keyfile::load_private_key(key.as_path())?;
    log::info!("loaded signing key {}", key.public_key());

    Server::new(ServerConfig { listen_addr }, key)
        .listen()
        .await?;

    Ok(())
}
