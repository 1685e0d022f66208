// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON-lines session loop.
//!
//! Each non-blank input line holds one request. Each produces exactly one
//! output line: a response on success, an error object otherwise.

use crate::error::SessionError;
use cake_collate::Model;
use cake_collate_api::{ApiError, ErrorResponse, Request, Response, handle_request};
use cake_collate_domain::today_in_timezone;
use std::io::{BufRead, Write};
use time::Date;
use tracing::{debug, info, warn};

/// Where "today" comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodaySource {
    /// The same date for every request.
    Fixed(Date),
    /// The current date in a timezone, read before every request.
    Timezone(String),
}

impl TodaySource {
    /// Returns today's date.
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is unknown.
    pub fn today(&self) -> Result<Date, SessionError> {
        match self {
            Self::Fixed(date) => Ok(*date),
            Self::Timezone(name) => today_in_timezone(name).map_err(SessionError::from),
        }
    }
}

/// Counts of what a session processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    /// Requests that were read.
    pub requests: usize,
    /// Requests that were rejected.
    pub rejected: usize,
}

/// Runs requests from `input` against `model`, writing one line per request to `output`.
///
/// # Errors
///
/// Returns an error if reading, writing or encoding fails, or if today's
/// date cannot be determined.
pub fn run_session<R: BufRead, W: Write>(
    model: &mut Model,
    input: R,
    output: &mut W,
    today: &TodaySource,
) -> Result<SessionSummary, SessionError> {
    let mut summary: SessionSummary = SessionSummary::default();

    for (line_number, line) in input.lines().enumerate() {
        let line: String = line?;
        if line.trim().is_empty() {
            continue;
        }
        summary.requests += 1;

        let outcome: Result<Response, ErrorResponse> = match serde_json::from_str::<Request>(&line)
        {
            Ok(request) => {
                debug!(line = line_number + 1, ?request, "Handling request");
                handle_request(model, request, today.today()?)
                    .map_err(|err: ApiError| ErrorResponse::from(&err))
            }
            Err(err) => {
                warn!(line = line_number + 1, error = %err, "Malformed request");
                Err(ErrorResponse {
                    error: String::from("malformed_request"),
                    message: err.to_string(),
                })
            }
        };

        match outcome {
            Ok(response) => serde_json::to_writer(&mut *output, &response)?,
            Err(rejection) => {
                summary.rejected += 1;
                serde_json::to_writer(&mut *output, &rejection)?;
            }
        }
        writeln!(output)?;
    }

    output.flush()?;
    info!(
        requests = summary.requests,
        rejected = summary.rejected,
        "Session finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2021 - 12 - 20);

    fn run(lines: &str) -> (Model, SessionSummary, Vec<serde_json::Value>) {
        let mut model: Model = Model::new();
        let mut output: Vec<u8> = Vec::new();
        let summary: SessionSummary = run_session(
            &mut model,
            lines.as_bytes(),
            &mut output,
            &TodaySource::Fixed(TODAY),
        )
        .unwrap();
        let values: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line: &str| serde_json::from_str(line).unwrap())
            .collect();
        (model, summary, values)
    }

    const ADD_ALICE: &str = r#"{"command":"add","name":"Alice","phone":"98765432","email":"alice@example.com","address":"1 Road","order_descriptions":["Cheesecake"],"delivery_date":"01/01/2022"}"#;

    #[test]
    fn test_each_request_produces_one_line() {
        let input: String = format!("{ADD_ALICE}\n\n{{\"command\":\"list\"}}\n");

        let (model, summary, values) = run(&input);

        assert_eq!(summary, SessionSummary { requests: 2, rejected: 0 });
        assert_eq!(values.len(), 2);
        assert_eq!(values[1]["message"], "Listed all orders");
        assert_eq!(model.orders().len(), 1);
    }

    #[test]
    fn test_session_continues_after_rejection() {
        let input: String =
            format!("{ADD_ALICE}\n{ADD_ALICE}\nnot json\n{{\"command\":\"list\"}}\n");

        let (_, summary, values) = run(&input);

        assert_eq!(summary, SessionSummary { requests: 4, rejected: 2 });
        assert_eq!(values[1]["error"], "domain_rule_violation");
        assert_eq!(values[2]["error"], "malformed_request");
        assert_eq!(values[3]["orders"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_timezone_ends_session() {
        let mut model: Model = Model::new();
        let mut output: Vec<u8> = Vec::new();

        let result: Result<SessionSummary, SessionError> = run_session(
            &mut model,
            "{\"command\":\"list\"}\n".as_bytes(),
            &mut output,
            &TodaySource::Timezone(String::from("Mars/Olympus_Mons")),
        );

        assert!(matches!(result, Err(SessionError::Today(_))));
    }
}
