use clap::Parser;
use loan_advisor::application::calculator::LoanCalculator;
use loan_advisor::config::{Cli, Command, QuoteArgs, ServeArgs};
use loan_advisor::domain::loan::LoanRequest;
use loan_advisor::interfaces::http::{self, dto::QuoteResponse};
use loan_advisor::telemetry;
use miette::{IntoDiagnostic, Result};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Quote(args) => quote(args),
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    telemetry::init(args.log_format);

    let addr = args.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .into_diagnostic()?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, http::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()?;

    tracing::info!("server stopped");
    Ok(())
}

fn quote(args: QuoteArgs) -> Result<()> {
    let request = LoanRequest {
        salary: args.salary,
        monthly_interest: args.monthly_interest,
        loan_tenor: args.loan_tenor,
    };
    let quote = LoanCalculator::new().quote(&request).into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &QuoteResponse::from(quote)).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
