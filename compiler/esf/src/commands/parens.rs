//! The `parens` command: show which nodes sit inside parentheses.

use esf_fmt::{locate_parentheses, needs_space_inside};
use esf_ir::{NodeKind, TokenId, TokenList};

use super::read_file;
use crate::{describe_error, line_col, FormatError};

/// A node with a located wrapping pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParenReport {
    pub kind: NodeKind,
    /// Line and column of the opening parenthesis.
    pub opening: (usize, usize),
    /// Line and column of the closing parenthesis.
    pub closing: (usize, usize),
    /// Whether spacing rules apply inside the pair.
    pub applicable: bool,
}

/// Every node of `source` with a wrapping pair, in pre-order.
pub fn report_parens(source: &str) -> Result<Vec<ParenReport>, FormatError> {
    let tokens = esf_lexer::tokenize(source)?;
    let output = esf_parse::parse(&tokens)?;
    let offsets = token_offsets(&tokens);
    let position = |id: TokenId| {
        let offset = offsets.get(id.index()).copied().unwrap_or(source.len());
        line_col(source, offset)
    };

    let reports = output
        .arena
        .preorder(output.root)
        .into_iter()
        .filter_map(|node| {
            let pair = locate_parentheses(&tokens, &output.arena, node)?;
            Some(ParenReport {
                kind: output.arena[node].kind,
                opening: position(pair.opening),
                closing: position(pair.closing),
                applicable: needs_space_inside(&output.arena, node),
            })
        })
        .collect();
    Ok(reports)
}

/// Byte offset of each token, indexed by `TokenId`.
fn token_offsets(tokens: &TokenList) -> Vec<usize> {
    let mut offsets = vec![0; tokens.len()];
    let mut offset = 0;
    for (id, token) in tokens {
        if let Some(slot) = offsets.get_mut(id.index()) {
            *slot = offset;
        }
        offset += token.value.len();
    }
    offsets
}

/// Print the parenthesis report for `path`.
pub fn parens_file(path: &str) {
    let content = read_file(path);
    match report_parens(&content) {
        Ok(reports) => {
            println!("Parenthesized nodes in '{}' ({}):", path, reports.len());
            for report in reports {
                let (open_line, open_col) = report.opening;
                let (close_line, close_col) = report.closing;
                println!(
                    "  {} ({open_line}:{open_col} .. {close_line}:{close_col}){}",
                    report.kind,
                    if report.applicable { "" } else { " [not applicable]" },
                );
            }
        }
        Err(e) => {
            eprintln!("{}", describe_error(path, &content, &e));
            std::process::exit(1);
        }
    }
}
