//! 查询参数反序列化辅助
//!
//! 与分页参数同理：flatten 之后 urlencoded 的值一律以字符串形式到达，
//! 可选的数字 / 布尔 / 日期筛选参数需要在这里自行解析。

use serde::Deserialize;

pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid integer: '{s}'"))),
    }
}

pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("true") | Some("1") => Ok(Some(true)),
        Some("false") | Some("0") => Ok(Some(false)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "invalid boolean: '{other}'"
        ))),
    }
}

pub fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<chrono::NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<chrono::NaiveDate>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid date: '{s}'"))),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "super::deserialize_optional_i64")]
        course_id: Option<i64>,
        #[serde(default, deserialize_with = "super::deserialize_optional_bool")]
        exported: Option<bool>,
        #[serde(default, deserialize_with = "super::deserialize_optional_date")]
        date_from: Option<chrono::NaiveDate>,
    }

    #[test]
    fn test_parses_string_values() {
        let params: Params = serde_json::from_str(
            r#"{"course_id":"3","exported":"true","date_from":"2026-03-06"}"#,
        )
        .unwrap();
        assert_eq!(params.course_id, Some(3));
        assert_eq!(params.exported, Some(true));
        assert_eq!(
            params.date_from,
            chrono::NaiveDate::from_ymd_opt(2026, 3, 6)
        );
    }

    #[test]
    fn test_missing_and_empty_values_are_none() {
        let params: Params = serde_json::from_str(r#"{"course_id":"","exported":""}"#).unwrap();
        assert_eq!(params.course_id, None);
        assert_eq!(params.exported, None);
        assert_eq!(params.date_from, None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Params>(r#"{"course_id":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Params>(r#"{"exported":"maybe"}"#).is_err());
        assert!(serde_json::from_str::<Params>(r#"{"date_from":"03/06/2026"}"#).is_err());
    }
}
