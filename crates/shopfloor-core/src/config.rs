//! 狀態判定配置

use chrono::{FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ShopfloorError;

/// 預設參考時區：美東標準時間（UTC-5）
const DEFAULT_UTC_OFFSET_MINUTES: i32 = -5 * 60;

/// 合法的 UTC 偏移上限（分鐘）
const MAX_UTC_OFFSET_MINUTES: u32 = 18 * 60;

/// 狀態判定配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DerivationConfig {
    /// 計算「今天」時使用的參考 UTC 偏移（分鐘）
    ///
    /// 固定偏移不含夏令時間；需要精確日期的呼叫端應直接傳入判定日期。
    pub reference_utc_offset_minutes: i32,

    /// 里程碑日期倒序時是否記錄警告（不影響判定結果）
    pub warn_on_out_of_order: bool,
}

impl DerivationConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            reference_utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            warn_on_out_of_order: true,
        }
    }

    /// 從 JSON 載入，缺少的欄位使用預設值
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置參考 UTC 偏移
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.reference_utc_offset_minutes = minutes;
        self
    }

    /// 建構器模式：設置是否警告倒序里程碑
    pub fn with_warn_on_out_of_order(mut self, warn: bool) -> Self {
        self.warn_on_out_of_order = warn;
        self
    }

    /// 檢查配置
    pub fn validate(&self) -> crate::Result<()> {
        self.offset().map(|_| ())
    }

    /// 參考時區偏移
    pub fn offset(&self) -> crate::Result<FixedOffset> {
        if self.reference_utc_offset_minutes.unsigned_abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ShopfloorError::InvalidConfig(format!(
                "UTC 偏移超出範圍: {} 分鐘",
                self.reference_utc_offset_minutes
            )));
        }

        FixedOffset::east_opt(self.reference_utc_offset_minutes * 60).ok_or_else(|| {
            ShopfloorError::InvalidConfig(format!(
                "無效的 UTC 偏移: {} 分鐘",
                self.reference_utc_offset_minutes
            ))
        })
    }

    /// 參考時區的今天
    ///
    /// 偏移無效時退回 UTC，確保狀態判定不會因配置錯誤而中斷。
    pub fn today(&self) -> NaiveDate {
        let now = Utc::now();
        match self.offset() {
            Ok(offset) => now.with_timezone(&offset).date_naive(),
            Err(_) => now.date_naive(),
        }
    }
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = DerivationConfig::default();

        assert_eq!(config.reference_utc_offset_minutes, -300);
        assert!(config.warn_on_out_of_order);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = DerivationConfig::new()
            .with_utc_offset_minutes(480)
            .with_warn_on_out_of_order(false);

        assert_eq!(config.offset().unwrap().local_minus_utc(), 480 * 60);
        assert!(!config.warn_on_out_of_order);
    }

    #[test]
    fn test_from_json_partial() {
        let config = DerivationConfig::from_json_str(r#"{ "warnOnOutOfOrder": false }"#).unwrap();

        assert_eq!(config.reference_utc_offset_minutes, -300);
        assert!(!config.warn_on_out_of_order);
    }

    #[rstest]
    #[case(r#"{ "referenceUtcOffsetMinutes": 2000 }"#)]
    #[case(r#"{ "referenceUtcOffsetMinutes": -2000 }"#)]
    #[case(r#"{ "referenceUtcOffsetMinutes": -2147483648 }"#)]
    #[case(r#"{ "referenceUtcOffsetMinutes": 2147483647 }"#)]
    fn test_from_json_rejects_out_of_range_offset(#[case] json: &str) {
        let result = DerivationConfig::from_json_str(json);
        assert!(matches!(result, Err(ShopfloorError::InvalidConfig(_))));
    }

    #[test]
    fn test_json_keys_are_camel_case() {
        let config = DerivationConfig::from_json_str(
            r#"{ "referenceUtcOffsetMinutes": 60, "warnOnOutOfOrder": false }"#,
        )
        .unwrap();
        assert_eq!(config.reference_utc_offset_minutes, 60);
        assert!(!config.warn_on_out_of_order);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["referenceUtcOffsetMinutes"], 60);
        assert_eq!(json["warnOnOutOfOrder"], false);
    }

    #[test]
    fn test_extreme_offset_falls_back_to_utc() {
        let config = DerivationConfig::new().with_utc_offset_minutes(i32::MIN);

        assert!(config.offset().is_err());
        let utc_today = Utc::now().date_naive();
        assert!((utc_today - config.today()).num_days().abs() <= 1);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = DerivationConfig::from_json_str("not json");
        assert!(matches!(result, Err(ShopfloorError::Serialization(_))));
    }

    #[test]
    fn test_today_is_near_utc_today() {
        let config = DerivationConfig::default();
        let today = config.today();
        let utc_today = Utc::now().date_naive();

        assert!((utc_today - today).num_days().abs() <= 1);
    }
}
