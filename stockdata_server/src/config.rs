//! Process configuration from flags, environment, and `.env`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use stockdata_api::{Events, HistoryQuery, Interval, DEFAULT_BASE_URL, MAX_PERIOD2};

/// Serve a provider's historical quotes as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "stockdata-proxy")]
#[command(about = "Proxy historical stock quotes from a CSV provider as JSON")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "STOCKDATA_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "STOCKDATA_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Base URL of the quotes provider
    #[arg(long, env = "STOCKDATA_UPSTREAM_URL", default_value = DEFAULT_BASE_URL)]
    pub upstream_url: String,

    /// Ticker symbol to proxy
    #[arg(long, env = "STOCKDATA_SYMBOL", default_value = "NVDA")]
    pub symbol: String,

    /// Start of the range, Unix seconds
    #[arg(long, env = "STOCKDATA_PERIOD1", default_value_t = 0, allow_negative_numbers = true)]
    pub period1: i64,

    /// End of the range, Unix seconds
    #[arg(long, env = "STOCKDATA_PERIOD2", default_value_t = MAX_PERIOD2)]
    pub period2: i64,

    /// Bar interval: 1d, 1wk or 1mo
    #[arg(long, env = "STOCKDATA_INTERVAL", default_value = "1d")]
    pub interval: Interval,

    /// Event series: history, div or split
    #[arg(long, env = "STOCKDATA_EVENTS", default_value = "history")]
    pub events: Events,

    /// Upstream request timeout in seconds (0 disables it)
    #[arg(long, env = "STOCKDATA_UPSTREAM_TIMEOUT_SECS", default_value_t = 30)]
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// The download every request performs.
    pub fn history_query(&self) -> HistoryQuery {
        HistoryQuery::default()
            .with_symbol(&self.symbol)
            .with_period1(self.period1)
            .with_period2(self.period2)
            .with_interval(self.interval)
            .with_events(self.events)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        match self.upstream_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
