//! Parses a request message and prints it as json.
//!
//! ```text
//! cargo run --example parse_request -- path/to/request.txt
//! ```
//!
//! Without a path a built-in multipart request is parsed.

use std::{env, fs, process};

use http_request_parser::RequestParser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

const SAMPLE_REQUEST: &str = "POST http://localhost/test?dd=e HTTP/1.1\n\
Host: localhost\n\
Connection: keep-alive\n\
Content-Length: 135\n\
Cache-Control: no-cache\n\
Content-Type: multipart/form-data; boundary=----WebKitFormBoundaryaR6AB9NJoRl7qj9u\n\
Accept: */*\n\
Accept-Encoding: gzip,deflate,sdch\n\
Accept-Language: ru-RU,ru;q=0.8,en-US;q=0.6,en;q=0.4\n\
Cookie: csrftoken=123abc;sessionid=456def\n\
\n\
---------------------------WebKitFormBoundaryaR6AB9NJoRl7qj9u\n\
Content-Disposition: form-data; name=\"a\"\n\
\n\
123\n\
---------------------------WebKitFormBoundaryaR6AB9NJoRl7qj9u--\n";

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let message = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(message) => message,
            Err(e) => {
                error!(cause = %e, path = %path, "failed to read request message");
                process::exit(1);
            }
        },
        None => SAMPLE_REQUEST.to_string(),
    };

    let parser = RequestParser::builder().default_limits().build();
    match parser.parse(&message) {
        Ok(request) => {
            info!(method = request.method(), url = request.url(), "parsed request message");
            match serde_json::to_string_pretty(&request) {
                Ok(json) => println!("{json}"),
                Err(e) => error!(cause = %e, "failed to serialize request"),
            }
        }
        Err(e) => {
            error!(cause = %e, "failed to parse request message");
            process::exit(1);
        }
    }
}
