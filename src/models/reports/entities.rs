use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 出勤状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum Attendance {
    Present,
    Absent,
    Late,
}

impl Attendance {
    pub const PRESENT: &'static str = "present";
    pub const ABSENT: &'static str = "absent";
    pub const LATE: &'static str = "late";

    /// 导出用显示标签
    pub fn display(&self) -> &'static str {
        match self {
            Attendance::Present => "Present",
            Attendance::Absent => "Absent",
            Attendance::Late => "Late",
        }
    }
}

impl<'de> Deserialize<'de> for Attendance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Attendance::PRESENT => Ok(Attendance::Present),
            Attendance::ABSENT => Ok(Attendance::Absent),
            Attendance::LATE => Ok(Attendance::Late),
            _ => Err(serde::de::Error::custom(format!(
                "无效的出勤状态: '{s}'. 支持的状态: present, absent, late"
            ))),
        }
    }
}

impl std::fmt::Display for Attendance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attendance::Present => write!(f, "{}", Attendance::PRESENT),
            Attendance::Absent => write!(f, "{}", Attendance::ABSENT),
            Attendance::Late => write!(f, "{}", Attendance::LATE),
        }
    }
}

impl std::str::FromStr for Attendance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Attendance::Present),
            "absent" => Ok(Attendance::Absent),
            "late" => Ok(Attendance::Late),
            _ => Err(format!("Invalid attendance: {s}")),
        }
    }
}

// 作业投入程度
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum HomeworkEffort {
    Low,
    Medium,
    High,
}

impl HomeworkEffort {
    pub const LOW: &'static str = "low";
    pub const MEDIUM: &'static str = "medium";
    pub const HIGH: &'static str = "high";

    /// 导出用显示标签
    pub fn display(&self) -> &'static str {
        match self {
            HomeworkEffort::Low => "Low",
            HomeworkEffort::Medium => "Medium",
            HomeworkEffort::High => "High",
        }
    }
}

impl<'de> Deserialize<'de> for HomeworkEffort {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            HomeworkEffort::LOW => Ok(HomeworkEffort::Low),
            HomeworkEffort::MEDIUM => Ok(HomeworkEffort::Medium),
            HomeworkEffort::HIGH => Ok(HomeworkEffort::High),
            _ => Err(serde::de::Error::custom(format!(
                "无效的作业投入程度: '{s}'. 支持的程度: low, medium, high"
            ))),
        }
    }
}

impl std::fmt::Display for HomeworkEffort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HomeworkEffort::Low => write!(f, "{}", HomeworkEffort::LOW),
            HomeworkEffort::Medium => write!(f, "{}", HomeworkEffort::MEDIUM),
            HomeworkEffort::High => write!(f, "{}", HomeworkEffort::HIGH),
        }
    }
}

impl std::str::FromStr for HomeworkEffort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(HomeworkEffort::Low),
            "medium" => Ok(HomeworkEffort::Medium),
            "high" => Ok(HomeworkEffort::High),
            _ => Err(format!("Invalid homework effort: {s}")),
        }
    }
}

// 辅导报告实体（某小组某周的一次记录）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct Report {
    pub id: i64,
    pub group_id: i64,
    pub plan_id: i64,
    pub date: chrono::NaiveDate,
    pub week: i32,
    pub exported: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 报告中的学生明细行（随报告表单内联编辑）
//
// quiz 为空或空串都算"无测验"。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportStudent {
    pub id: i64,
    pub report_id: i64,
    pub student_id: i64,
    pub attendance: Attendance,
    pub exit_ticket: Option<i32>,
    pub homework_effort: HomeworkEffort,
    pub homework_accuracy: Option<i32>,
    pub quiz: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_attendance_display_labels() {
        assert_eq!(Attendance::Present.display(), "Present");
        assert_eq!(Attendance::Absent.display(), "Absent");
        assert_eq!(Attendance::Late.display(), "Late");
    }

    #[test]
    fn test_attendance_round_trip() {
        for s in ["present", "absent", "late"] {
            assert_eq!(Attendance::from_str(s).unwrap().to_string(), s);
        }
        assert!(Attendance::from_str("tardy").is_err());
    }

    #[test]
    fn test_homework_effort_display_labels() {
        assert_eq!(HomeworkEffort::Low.display(), "Low");
        assert_eq!(HomeworkEffort::Medium.display(), "Medium");
        assert_eq!(HomeworkEffort::High.display(), "High");
    }

    #[test]
    fn test_homework_effort_round_trip() {
        for s in ["low", "medium", "high"] {
            assert_eq!(HomeworkEffort::from_str(s).unwrap().to_string(), s);
        }
        assert!(HomeworkEffort::from_str("extreme").is_err());
    }
}
