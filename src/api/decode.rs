use super::{ApiError, ApiResult};
use crate::locale::UNKNOWN_ERROR;
use crate::types::{
    AgeCheckResponse, AgeDecision, GenerateResponse, HoroscopeResult, StatRow, StatsResponse,
};
use time::{Date, format_description::FormatItem, macros::format_description};

const BIRTHDATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn rejection(ok: Option<bool>, error: Option<String>) -> Option<ApiError> {
    if ok == Some(false) || error.is_some() {
        let message = error
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        return Some(ApiError::Rejected(message));
    }
    None
}

/// `{ok:true,...}` succeeds; `{ok:false,error}` and a bare `{error}` are rejections.
pub fn decode_generate(body: &str) -> ApiResult<HoroscopeResult> {
    let response: GenerateResponse = serde_json::from_str(body)?;
    if let Some(err) = rejection(response.ok, response.error) {
        return Err(err);
    }
    Ok(HoroscopeResult {
        sign: response.sign.ok_or(ApiError::Malformed("sign"))?,
        text: response.text.ok_or(ApiError::Malformed("text"))?,
        sarcasm: response.sarcasm.ok_or(ApiError::Malformed("sarcasm"))?,
    })
}

pub fn decode_age(body: &str) -> ApiResult<AgeDecision> {
    let response: AgeCheckResponse = serde_json::from_str(body)?;
    if let Some(err) = rejection(response.ok, response.error) {
        return Err(err);
    }
    if response.allowed == Some(true) {
        Ok(AgeDecision::Allowed)
    } else {
        Ok(AgeDecision::Denied(response.reason))
    }
}

pub fn decode_stats(body: &str) -> ApiResult<Vec<StatRow>> {
    let response: StatsResponse = serde_json::from_str(body)?;
    if let Some(err) = rejection(response.ok, response.error) {
        return Err(err);
    }
    Ok(response.stats)
}

/// Checks a `YYYY-MM-DD` date before it is sent to the age gate.
pub fn normalize_birthdate(input: &str) -> ApiResult<String> {
    let trimmed = input.trim();
    let date = Date::parse(trimmed, BIRTHDATE_FORMAT)
        .map_err(|_| ApiError::InvalidBirthdate(trimmed.to_string()))?;
    date.format(BIRTHDATE_FORMAT)
        .map_err(|_| ApiError::InvalidBirthdate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_success() {
        let result = decode_generate(
            r#"{"ok":true,"sign":"Leo","text":"You will trip on air.","sarcasm":77,"source":"server-generated"}"#,
        )
        .unwrap();
        assert_eq!(result.sign, "Leo");
        assert_eq!(result.sarcasm.to_string(), "77");
    }

    #[test]
    fn generate_error_shapes() {
        for body in [
            r#"{"ok":false,"error":"rate limited"}"#,
            r#"{"error":"rate limited"}"#,
        ] {
            match decode_generate(body) {
                Err(ApiError::Rejected(msg)) => assert_eq!(msg, "rate limited"),
                other => panic!("unexpected {other:?}"),
            }
        }
        match decode_generate(r#"{"ok":false}"#) {
            Err(ApiError::Rejected(msg)) => assert_eq!(msg, UNKNOWN_ERROR),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn generate_garbage() {
        assert!(matches!(
            decode_generate("<html>502</html>"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            decode_generate(r#"{"ok":true,"sign":"Leo"}"#),
            Err(ApiError::Malformed("text"))
        ));
    }

    #[test]
    fn age_verdicts() {
        assert_eq!(
            decode_age(r#"{"ok":true,"allowed":true}"#).unwrap(),
            AgeDecision::Allowed
        );
        assert_eq!(
            decode_age(r#"{"ok":true,"allowed":false,"reason":"too young"}"#).unwrap(),
            AgeDecision::Denied(Some("too young".into()))
        );
        assert!(matches!(
            decode_age(r#"{"ok":false,"error":"birthdate required"}"#),
            Err(ApiError::Rejected(_))
        ));
    }

    #[test]
    fn stats_rows() {
        let rows =
            decode_stats(r#"{"ok":true,"stats":[{"sign":"Лев","tone":"hard","cnt":3}]}"#).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cnt, 3);
    }

    #[test]
    fn birthdate_validation() {
        assert_eq!(normalize_birthdate(" 2001-02-03 ").unwrap(), "2001-02-03");
        assert!(matches!(
            normalize_birthdate("03.02.2001"),
            Err(ApiError::InvalidBirthdate(_))
        ));
        assert!(normalize_birthdate("2001-02-30").is_err());
    }
}
