use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the loan recommendation HTTP API
    Serve(ServeArgs),
    /// Print a single quote as JSON and exit
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "LOAN_ADVISOR_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "LOAN_ADVISOR_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "LOAN_ADVISOR_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl ServeArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Args, Debug, Clone, Copy)]
pub struct QuoteArgs {
    /// Net monthly salary
    #[arg(long, allow_negative_numbers = true)]
    pub salary: f64,

    /// Monthly interest in percent (2.5 means 2.5%)
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_interest: f64,

    /// Loan tenor in months: 3, 6 or 12
    #[arg(long, allow_negative_numbers = true)]
    pub loan_tenor: i64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}
