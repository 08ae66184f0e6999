/// The three places a caller may put its token, borrowed from one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inbound<'a> {
    body: &'a [u8],
    query: &'a str,
    authorization: Option<&'a str>,
}

impl<'a> Inbound<'a> {
    pub fn new(body: &'a [u8], query: &'a str, authorization: Option<&'a str>) -> Self {
        Self {
            body,
            query,
            authorization,
        }
    }

    /// First non-empty token from body, then query string, then header.
    pub fn token(&self) -> Option<String> {
        self.body_token()
            .or_else(|| self.query_token())
            .or_else(|| self.header_token())
    }

    /// JSON object field `token`, or a urlencoded form field when the body is not JSON.
    fn body_token(&self) -> Option<String> {
        if self.body.is_empty() {
            return None;
        }
        match serde_json::from_slice::<serde_json::Value>(self.body) {
            Ok(json) => json
                .get("token")
                .and_then(serde_json::Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_owned),
            Err(_) => serde_urlencoded::from_bytes::<Vec<(String, String)>>(self.body)
                .ok()
                .and_then(field),
        }
    }

    fn query_token(&self) -> Option<String> {
        serde_urlencoded::from_str::<Vec<(String, String)>>(self.query)
            .ok()
            .and_then(field)
    }

    /// `Bearer <token>` keeps the trimmed segment after the last space.
    /// A value without a separator is taken whole. A bare scheme counts as
    /// no token, including when the transport already stripped its trailing space.
    fn header_token(&self) -> Option<String> {
        self.authorization
            .filter(|header| !header.trim().eq_ignore_ascii_case("bearer"))
            .and_then(|header| header.split(' ').next_back())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
    }
}

fn field(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, value)| key == "token" && !value.is_empty())
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_yields_trimmed_token() {
        let inbound = Inbound::new(b"", "", Some("Bearer abc123"));
        assert_eq!(inbound.token().as_deref(), Some("abc123"));
        let inbound = Inbound::new(b"", "", Some("  Bearer  abc123\t"));
        assert_eq!(inbound.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn bare_scheme_yields_nothing() {
        for header in ["Bearer ", "Bearer", "bearer  ", "Bearer abc "] {
            let inbound = Inbound::new(b"", "", Some(header));
            assert_eq!(inbound.token(), None, "{:?}", header);
        }
    }

    #[test]
    fn header_without_separator_is_taken_whole() {
        let inbound = Inbound::new(b"", "", Some("abc123"));
        assert_eq!(inbound.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn blank_header_yields_nothing() {
        let inbound = Inbound::new(b"", "", Some("   "));
        assert_eq!(inbound.token(), None);
    }

    #[test]
    fn body_beats_header() {
        let inbound = Inbound::new(br#"{"token":"from-body"}"#, "", Some("Bearer from-header"));
        assert_eq!(inbound.token().as_deref(), Some("from-body"));
    }

    #[test]
    fn body_beats_query_beats_header() {
        let inbound = Inbound::new(
            br#"{"token":"from-body"}"#,
            "token=from-query",
            Some("Bearer from-header"),
        );
        assert_eq!(inbound.token().as_deref(), Some("from-body"));
        let inbound = Inbound::new(b"", "token=from-query", Some("Bearer from-header"));
        assert_eq!(inbound.token().as_deref(), Some("from-query"));
    }

    #[test]
    fn body_token_is_not_split() {
        let inbound = Inbound::new(br#"{"token":"Bearer abc"}"#, "", Some("Bearer other"));
        assert_eq!(inbound.token().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn empty_sources_fall_through() {
        let inbound = Inbound::new(br#"{"token":""}"#, "token=", Some("Bearer from-header"));
        assert_eq!(inbound.token().as_deref(), Some("from-header"));
    }

    #[test]
    fn non_string_body_token_is_ignored() {
        let inbound = Inbound::new(br#"{"token":42}"#, "", None);
        assert_eq!(inbound.token(), None);
    }

    #[test]
    fn form_body_is_read() {
        let inbound = Inbound::new(b"title=dune&token=from-form", "", None);
        assert_eq!(inbound.token().as_deref(), Some("from-form"));
    }

    #[test]
    fn query_among_other_params() {
        let inbound = Inbound::new(b"", "page=2&token=abc%2Edef", None);
        assert_eq!(inbound.token().as_deref(), Some("abc.def"));
    }

    #[test]
    fn nothing_anywhere() {
        let inbound = Inbound::new(br#"{"operation":"me"}"#, "page=2", None);
        assert_eq!(inbound.token(), None);
    }
}
