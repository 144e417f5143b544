use regex::Regex;

/// Path shape of the per-query TSV report that CovSurver embeds in the HTML
/// returned after a successful submission.
pub const RESULT_LINK_PATTERN: &str = r"/mendeltemp/covsurver_result\d+_perquery\.tsv";

/// Scans a submission response body for the generated result link.
///
/// Returns the first matching relative path, borrowed from `body`. The server
/// emits no such link when it rejects the submitted sequences, so `None`
/// means the submission produced no downloadable report.
pub fn find_result_link(body: &str) -> Option<&str> {
    let re = Regex::new(RESULT_LINK_PATTERN).unwrap();
    re.find(body).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_result_link_in_html_body() {
        let body = concat!(
            "<html><body>Annotation complete.<br>\n",
            "<a href=\"/mendeltemp/covsurver_result123_perquery.tsv\">Download</a>\n",
            "</body></html>"
        );
        assert_eq!(
            find_result_link(body),
            Some("/mendeltemp/covsurver_result123_perquery.tsv")
        );
    }

    #[test]
    fn test_find_result_link_multi_digit_id() {
        let body = "see /mendeltemp/covsurver_result987654_perquery.tsv for results";
        assert_eq!(
            find_result_link(body),
            Some("/mendeltemp/covsurver_result987654_perquery.tsv")
        );
    }

    #[test]
    fn test_find_result_link_requires_perquery_suffix() {
        // Same directory and result id, but not the per-query report.
        assert_eq!(find_result_link("/mendeltemp/covsurver_result123.tsv"), None);
    }

    #[test]
    fn test_find_result_link_requires_result_id() {
        assert_eq!(find_result_link("/mendeltemp/covsurver_result_perquery.tsv"), None);
    }

    #[test]
    fn test_find_result_link_rejects_mangled_extension() {
        assert_eq!(
            find_result_link("/mendeltemp/covsurver_result123_perquery_tsv"),
            None
        );
    }

    #[test]
    fn test_find_result_link_takes_first_match() {
        let body = "/mendeltemp/covsurver_result1_perquery.tsv \
                    /mendeltemp/covsurver_result2_perquery.tsv";
        assert_eq!(
            find_result_link(body),
            Some("/mendeltemp/covsurver_result1_perquery.tsv")
        );
    }

    #[test]
    fn test_find_result_link_empty_body() {
        assert_eq!(find_result_link(""), None);
    }
}
