use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use sipuri::SipUri;

fn main() -> io::Result<ExitCode> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut rejected = false;

    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            rejected |= !report(line?.trim());
        }
    } else {
        for arg in &args {
            rejected |= !report(arg);
        }
    }

    Ok(if rejected { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn report(input: &str) -> bool {
    match SipUri::parse(input) {
        Ok(uri) => {
            println!("{uri}");
            println!("  scheme:   {}", uri.scheme());
            println!("  userinfo: {}", uri.userinfo().unwrap_or("-"));
            println!("  hostport: {}", uri.hostport());
            println!("  params:   {}", uri.params().unwrap_or("-"));
            println!("  headers:  {}", uri.headers().unwrap_or("-"));
            true
        }
        Err(err) => {
            println!("{input}");
            println!("{:>width$}", "^", width = err.offset() + 1);
            println!("{err}");
            false
        }
    }
}
