/// Mission identifier used when the source name carries no hint.
pub const DEFAULT_MISSION: &str = "AFXXX 0000A INVEST";

/// Aircraft/mission prefix of inferred identifiers.
const MISSION_PREFIX: &str = "AFXXX";

/// Infer a mission identifier from a source file name or URL.
///
/// The last path segment is split on whitespace and underscores; the first
/// storm token (four digits then `A` or `B`, e.g. `0915A`) that is followed
/// by another token yields `AFXXX <storm> <NEXT>`, the next token uppercased.
///
/// # Example
/// ```
/// use hdobconv::mission::infer_mission;
///
/// assert_eq!(
///     infer_mission("https://host/data/20240925_0915A_helene_iwg1.txt"),
///     "AFXXX 0915A HELENE"
/// );
/// assert_eq!(infer_mission("flight.txt"), "AFXXX 0000A INVEST");
/// ```
pub fn infer_mission(source: &str) -> String {
    let tail = source.rsplit('/').next().unwrap_or(source);
    let tokens: Vec<&str> = tail
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    tokens
        .windows(2)
        .find(|pair| is_storm_token(pair[0]))
        .map(|pair| format!("{} {} {}", MISSION_PREFIX, pair[0], pair[1].to_uppercase()))
        .unwrap_or_else(|| DEFAULT_MISSION.to_string())
}

fn is_storm_token(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() == 5
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && matches!(bytes[4], b'A' | b'B')
}
