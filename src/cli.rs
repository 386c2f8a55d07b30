use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use ws_submit::sender::DEFAULT_ENDPOINT;
use ws_submit::{Payload, SendResult, SenderConfig};

const DEFAULT_URL: &str = "https://www.luogu.com.cn/problem/P1001";

const DEFAULT_CODE: &str = r#"
#include <bits/stdc++.h>
#define EACH(a) for (auto &it : a)
#define REP(i, n) for (ll i = 0, _ = (n); i < _; i++)
#define REPD(i, n) for (ll i = (ll)(n) - 1, _ = 0; i >= _; i--)

using namespace std;
using ll = long long;
using pl = pair<ll, ll>;
using vl = vector<ll>;
using vpl = vector<pl>;
const ll MOD = 998244353;

void solve() {}

int main() {
  cin.tie(0)->ios::sync_with_stdio(0);
  ll a, b;
  cin >> a >> b;
  cout << a + b << '\n';
}
"#;

/// Submit a problem URL and its solution source to a local WebSocket listener
#[derive(Debug, Parser)]
#[command(name = "ws-submit", version, about, long_about = None)]
pub struct Cli {
    /// WebSocket endpoint to connect to
    #[arg(short, long, env = "WS_SUBMIT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Problem URL the code is submitted for
    #[arg(short, long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Source code given inline
    #[arg(short, long, conflicts_with = "file")]
    pub code: Option<String>,

    /// Read source code from a file (`-` for stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Connect timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Seconds to wait for the listener to answer our close frame
    #[arg(long, default_value_t = 2)]
    pub close_timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> SenderConfig {
        SenderConfig::default()
            .with_endpoint(self.endpoint.clone())
            .with_connect_timeout(Duration::from_secs(self.timeout))
            .with_close_timeout(Duration::from_secs(self.close_timeout))
    }

    pub fn payload(&self) -> SendResult<Payload> {
        let code = match (&self.code, &self.file) {
            (Some(code), _) => code.clone(),
            (None, Some(path)) if path.as_os_str() == "-" => {
                let mut code = String::new();
                std::io::stdin().read_to_string(&mut code)?;
                code
            }
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => DEFAULT_CODE.to_string(),
        };
        Ok(Payload::new(self.url.clone(), code))
    }
}
