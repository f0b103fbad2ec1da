// src/cli.rs
use std::io;

use crate::{
    config::AppOptions,
    core::net::HttpClient,
    error::Result,
    session::{self, Session},
    specs::states,
};

/// Build the state directory, then hand stdin/stdout to the session.
///
/// Missing configuration, an unreachable home page, or broken terminal I/O end
/// the program with an error; everything else is reported inside the session.
pub fn run() -> Result<()> {
    crate::log::init();

    let options = AppOptions::from_env()?;
    logf!("starting with {:?}", options.places);

    let client = HttpClient::new()?;
    let directory = states::resolve(&client, &options.site).inspect_err(|e| loge!("startup failed: {e}"))?;

    let mut session = Session::new(&client, &options, directory);
    session::run(&mut session, io::stdin().lock(), io::stdout().lock())?;

    logf!("session ended");
    Ok(())
}
