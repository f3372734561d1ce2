//! Crisis resources shown when item 9 is flagged. The text is displayed
//! verbatim; the only logic is picking the region's list.

use std::str::FromStr;

use serde::Serialize;

use phq_core::models::questionnaire::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrisisRegion {
    Kr,
    Us,
    Intl,
}

impl FromStr for CrisisRegion {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kr" => Ok(CrisisRegion::Kr),
            "us" => Ok(CrisisRegion::Us),
            "intl" => Ok(CrisisRegion::Intl),
            other => Err(eyre::eyre!(
                "unknown crisis region '{other}' (expected kr, us or intl)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SafetyNotice {
    pub title: &'static str,
    pub message: &'static str,
    pub resources: Vec<CrisisResource>,
}

impl SafetyNotice {
    pub fn new(region: CrisisRegion, locale: Locale) -> Self {
        let (title, message) = match locale {
            Locale::En => (
                "Safety information (item 9)",
                "If you are having thoughts of death or of hurting yourself, get help right away.",
            ),
            Locale::Ko => (
                "안전 안내 (문항 9 관련)",
                "자살·자해 생각이 있을 때 즉시 도움 받기",
            ),
        };

        Self {
            title,
            message,
            resources: resources(region, locale),
        }
    }
}

fn resources(region: CrisisRegion, locale: Locale) -> Vec<CrisisResource> {
    let resource = |name, contact| CrisisResource { name, contact };
    match (region, locale) {
        (CrisisRegion::Kr, Locale::Ko) => vec![
            resource("자살예방상담 (24시간)", "1393"),
            resource("정신건강상담", "1577-0199"),
            resource("긴급", "112 / 119"),
        ],
        (CrisisRegion::Kr, Locale::En) => vec![
            resource("Suicide prevention counselling (24h)", "1393"),
            resource("Mental health counselling", "1577-0199"),
            resource("Emergency", "112 / 119"),
        ],
        (CrisisRegion::Us, _) => vec![
            resource("988 Suicide & Crisis Lifeline", "call or text 988"),
            resource("Emergency", "911"),
        ],
        (CrisisRegion::Intl, Locale::En) => vec![resource(
            "Local emergency services",
            "your local emergency number",
        )],
        (CrisisRegion::Intl, Locale::Ko) => {
            vec![resource("지역 응급 서비스", "현지 긴급 전화번호")]
        }
    }
}
