//! Everything printed on the invitation: names, dates, accounts and copy.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

pub const GROOM_NAME: &str = "방재호";
pub const BRIDE_NAME: &str = "김하정";
pub const VENUE: &str = "제주도";

/// Ids of the scroll-revealed sections, in page order.
pub const SECTION_IDS: [&str; 7] = [
    "greeting", "gallery", "calendar", "location", "account", "message", "share",
];

pub const SHARE_TITLE: &str = "방재호 ❤ 김하정 결혼식에 초대합니다";
pub const SHARE_DESCRIPTION: &str =
    "6월의 어느 멋진 날, 저희 두 사람이 이제 믿음과 사랑으로 한 길을 가고자 합니다.";
pub const SHARE_BUTTON: &str = "청첩장 보기";

pub const GREETING: [&[&str]; 3] = [
    &[
        "6월의 어느 멋진 날,",
        "저희 두 사람이 이제 믿음과 사랑으로",
        "한 길을 가고자 합니다.",
    ],
    &[
        "지금까지 늘 곁에서 아껴주셨던",
        "고마운 분들을 모시고",
        "혼인의 예를 갖추어야 하나",
        "양가 부모님과 가족들만 모시고",
        "작은 결혼식을 올리게 되었습니다.",
    ],
    &[
        "넓은 마음으로 양해 부탁드리며",
        "저희 두 사람 축복하고 격려해 주시면",
        "더없는 기쁨으로 간직하고",
        "예쁘게 살겠습니다.",
    ],
];

pub const SCRIPTURE: [&str; 3] = [
    "\"사랑은 모든 것을 믿고",
    "모든 것을 바라며",
    "모든 것을 견디느니라\"",
];
pub const SCRIPTURE_SOURCE: &str = "- 고린도전서 13:7 -";

pub const KOREAN_WEEKDAYS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Groom,
    Bride,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Groom => "신랑측",
            Side::Bride => "신부측",
        }
    }

    pub fn accounts(self) -> &'static [AccountEntry] {
        match self {
            Side::Groom => GROOM_ACCOUNTS,
            Side::Bride => BRIDE_ACCOUNTS,
        }
    }

    pub fn family(self) -> &'static Family {
        match self {
            Side::Groom => &FAMILIES[0],
            Side::Bride => &FAMILIES[1],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub bank_name: &'static str,
    pub account_number: &'static str,
}

impl AccountEntry {
    pub fn display(&self) -> String {
        format!("{} {}", self.bank_name, self.account_number)
    }
}

pub const GROOM_ACCOUNTS: &[AccountEntry] = &[AccountEntry {
    id: "groom-father",
    label: "부: 방호준",
    bank_name: "부산은행",
    account_number: "232-12-0260640",
}];

pub const BRIDE_ACCOUNTS: &[AccountEntry] = &[AccountEntry {
    id: "bride-father",
    label: "부: 김광현",
    bank_name: "우리은행",
    account_number: "145-07-425586",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    pub parents: &'static str,
    pub relation: &'static str,
    pub child: &'static str,
}

pub const FAMILIES: [Family; 2] = [
    Family {
        parents: "방호준 · 김경희",
        relation: "장남",
        child: GROOM_NAME,
    },
    Family {
        parents: "김광현 · 박덕현",
        relation: "차녀",
        child: BRIDE_NAME,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    pub src: &'static str,
    /// Spans both gallery columns.
    pub wide: bool,
    pub position: &'static str,
}

pub const HEADER_PHOTO: &str = "/assets/images/2.jpg";

pub const GALLERY: [Photo; 5] = [
    Photo { src: "/assets/images/5.jpg", wide: true, position: "center" },
    Photo { src: "/assets/images/4.jpg", wide: false, position: "center" },
    Photo { src: "/assets/images/1.jpg", wide: false, position: "100%" },
    Photo { src: "/assets/images/7.jpg", wide: false, position: "center" },
    Photo { src: "/assets/images/8.jpg", wide: false, position: "bottom" },
];

pub fn wedding_at() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2025, 6, 29)?.and_hms_opt(13, 0, 0)
}

/// `2025. 06. 29. SUN PM 1:00`
pub fn header_date_line(at: &NaiveDateTime) -> String {
    format!(
        "{} {} {}",
        at.format("%Y. %m. %d."),
        at.format("%a").to_string().to_uppercase(),
        at.format("%p %-I:%M")
    )
}

/// `일요일 오후 1시 00분`
pub fn korean_time_line(at: &NaiveDateTime) -> String {
    let weekday = KOREAN_WEEKDAYS[at.weekday().num_days_from_sunday() as usize];
    let (pm, hour) = at.hour12();
    format!(
        "{}요일 {} {}시 {:02}분",
        weekday,
        if pm { "오후" } else { "오전" },
        hour,
        at.minute()
    )
}

/// `2025년 06월`
pub fn month_title(at: &NaiveDateTime) -> String {
    at.format("%Y년 %m월").to_string()
}

/// Layout of one calendar month, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    /// Empty cells before day 1.
    pub leading_blanks: u32,
    pub days: u32,
    pub highlight: u32,
}

impl MonthGrid {
    pub fn around(date: NaiveDate) -> Option<Self> {
        let first = date.with_day(1)?;
        let next = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
        };
        Some(Self {
            leading_blanks: first.weekday().num_days_from_sunday(),
            days: next.signed_duration_since(first).num_days() as u32,
            highlight: date.day(),
        })
    }

    /// CSS grid column (1-based) for `day`.
    pub fn column_of(&self, day: u32) -> u32 {
        (self.leading_blanks + day - 1) % 7 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedding_labels() {
        let at = wedding_at().unwrap();
        assert_eq!(header_date_line(&at), "2025. 06. 29. SUN PM 1:00");
        assert_eq!(korean_time_line(&at), "일요일 오후 1시 00분");
        assert_eq!(month_title(&at), "2025년 06월");
    }

    #[test]
    fn test_june_2025_grid() {
        let grid = MonthGrid::around(wedding_at().unwrap().date()).unwrap();
        assert_eq!(grid.leading_blanks, 0);
        assert_eq!(grid.days, 30);
        assert_eq!(grid.highlight, 29);
        assert_eq!(grid.column_of(1), 1);
        assert_eq!(grid.column_of(29), 1);
    }

    #[test]
    fn test_grid_handles_offsets_and_year_end() {
        let december = MonthGrid::around(NaiveDate::from_ymd_opt(2025, 12, 25).unwrap()).unwrap();
        // 2025-12-01 is a Monday.
        assert_eq!(december.leading_blanks, 1);
        assert_eq!(december.days, 31);
        assert_eq!(december.column_of(1), 2);
        assert_eq!(december.column_of(6), 7);

        let february = MonthGrid::around(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()).unwrap();
        assert_eq!(february.days, 29);
    }

    #[test]
    fn test_accounts_per_side() {
        let groom = Side::Groom.accounts();
        assert_eq!(groom[0].display(), "부산은행 232-12-0260640");
        assert_eq!(Side::Bride.accounts()[0].id, "bride-father");
        assert_eq!(Side::Bride.family().child, BRIDE_NAME);
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids = SECTION_IDS.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTION_IDS.len());
    }
}
