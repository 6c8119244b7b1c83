//! Loosely-typed views over an ESLint JSON report.
//!
//! The report schema belongs to ESLint and is not validated. Accessors map
//! absent or wrongly-typed fields to defaults instead of failing, so one odd
//! record never aborts a whole run.

use serde_json::Value as Json;

/// One element of the top-level report array (one linted file).
#[derive(Clone, Copy)]
pub struct ReportRecord<'a>(pub &'a Json);

/// One element of a record's `messages` array.
#[derive(Clone, Copy)]
pub struct MessageRecord<'a>(pub &'a Json);

fn str_field<'a>(v: &'a Json, key: &str) -> Option<&'a str> {
    v.get(key).and_then(Json::as_str)
}

impl<'a> ReportRecord<'a> {
    /// `filePath`, or an empty string when absent.
    pub fn file_path(&self) -> &'a str {
        str_field(self.0, "filePath").unwrap_or("")
    }

    /// `messages`, or nothing when absent or not an array.
    pub fn messages(&self) -> impl Iterator<Item = MessageRecord<'a>> + 'a {
        let v: &'a Json = self.0;
        v.get("messages")
            .and_then(Json::as_array)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(MessageRecord)
    }
}

impl<'a> MessageRecord<'a> {
    pub fn rule_id(&self) -> Option<&'a str> {
        str_field(self.0, "ruleId")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_degrade() {
        let v = json!({});
        let rec = ReportRecord(&v);
        assert_eq!(rec.file_path(), "");
        assert_eq!(rec.messages().count(), 0);
    }

    #[test]
    fn test_wrong_types_degrade() {
        let v = json!({"filePath": 42, "messages": "nope"});
        let rec = ReportRecord(&v);
        assert_eq!(rec.file_path(), "");
        assert_eq!(rec.messages().count(), 0);

        let m = json!({"ruleId": null});
        assert_eq!(MessageRecord(&m).rule_id(), None);
    }

    #[test]
    fn test_present_fields() {
        let v = json!({
            "filePath": "/w/src/a.ts",
            "messages": [{"ruleId": "no-console"}, {"message": "parse error"}]
        });
        let rec = ReportRecord(&v);
        assert_eq!(rec.file_path(), "/w/src/a.ts");
        let ids: Vec<_> = rec.messages().map(|m| m.rule_id()).collect();
        assert_eq!(ids, vec![Some("no-console"), None]);
    }
}
