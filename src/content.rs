//! Static content store for the landing page.
//!
//! Every record below is a compile-time constant. Components borrow the
//! tables read-only; nothing is created, updated or deleted at runtime.

#[derive(Debug, Clone, PartialEq)]
pub struct Coach {
    pub id: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub team: &'static str,
    pub experience: &'static [&'static str],
    pub image_url: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub name: &'static str,
    pub category: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// One point of the performance series: the month label with the
/// standard-training baseline and the AAV-enhanced trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub month: &'static str,
    pub standard: u32,
    pub aav: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
}

pub static COACHES: [Coach; 3] = [
    Coach {
        id: "1",
        name: "김철수 코치",
        position: "공격 전담 (WS/OP)",
        team: "전 현대캐피탈 스카이워커스",
        experience: &["V-리그 득점왕 2회", "국가대표 주전 공격수"],
        image_url: "https://picsum.photos/400/500?random=1",
    },
    Coach {
        id: "2",
        name: "이영희 코치",
        position: "세터 마스터 (S)",
        team: "전 흥국생명 핑크스파이더스",
        experience: &["베스트 세터상 3회 수상", "전술 분석 전문가"],
        image_url: "https://picsum.photos/400/500?random=2",
    },
    Coach {
        id: "3",
        name: "박민수 코치",
        position: "수비/리베로 (L)",
        team: "전 삼성화재 블루팡스",
        experience: &["수비 전담 코치 10년", "데이터 기반 리시브 교정"],
        image_url: "https://picsum.photos/400/500?random=3",
    },
];

pub static BRANCHES: [Branch; 7] = [
    Branch { name: "본점(배구&웨이트)", category: "종합", lat: 37.5, lng: 127.0 },
    Branch { name: "신촌(웨이트)", category: "피트니스", lat: 37.55, lng: 126.93 },
    Branch { name: "정동(배구)", category: "기술전용", lat: 37.56, lng: 126.97 },
    Branch { name: "김포(배구)", category: "기술전용", lat: 37.6, lng: 126.7 },
    Branch { name: "목동(배구&웨이트)", category: "종합", lat: 37.53, lng: 126.86 },
    Branch { name: "아현(배구)", category: "기술전용", lat: 37.55, lng: 126.95 },
    Branch { name: "이대점", category: "피트니스", lat: 37.56, lng: 126.94 },
];

// Chronological order is the array order.
pub static PERFORMANCE_DATA: [ChartPoint; 5] = [
    ChartPoint { month: "1월", standard: 65, aav: 70 },
    ChartPoint { month: "2월", standard: 68, aav: 78 },
    ChartPoint { month: "3월", standard: 64, aav: 85 },
    ChartPoint { month: "4월", standard: 67, aav: 92 },
    ChartPoint { month: "5월", standard: 70, aav: 98 },
];

pub static LATEST_NEWS: [NewsItem; 3] = [
    NewsItem {
        title: "선수 퍼스널 브랜딩의 중요성",
        date: "2024.03.12",
        category: "Branding",
        image_url: "https://picsum.photos/800/600?random=10",
    },
    NewsItem {
        title: "3D 모션 분석을 통한 점프력 향상",
        date: "2024.04.01",
        category: "Analysis",
        image_url: "https://picsum.photos/800/600?random=11",
    },
    NewsItem {
        title: "2025 FA 시장 전략 리포트",
        date: "2024.09.14",
        category: "Strategy",
        image_url: "https://picsum.photos/800/600?random=12",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_sizes_match_rendered_card_counts() {
        assert_eq!(COACHES.len(), 3);
        assert_eq!(BRANCHES.len(), 7);
        assert_eq!(PERFORMANCE_DATA.len(), 5);
        assert_eq!(LATEST_NEWS.len(), 3);
    }

    #[test]
    fn coach_ids_are_unique() {
        let ids: HashSet<_> = COACHES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COACHES.len());
    }

    #[test]
    fn branch_coordinates_are_valid() {
        for branch in &BRANCHES {
            assert!((-90.0..=90.0).contains(&branch.lat), "{}", branch.name);
            assert!((-180.0..=180.0).contains(&branch.lng), "{}", branch.name);
        }
    }

    #[test]
    fn performance_series_keeps_source_order() {
        let months: Vec<_> = PERFORMANCE_DATA.iter().map(|p| p.month).collect();
        assert_eq!(months, ["1월", "2월", "3월", "4월", "5월"]);
    }

    #[test]
    fn performance_series_has_both_values_per_month() {
        for point in &PERFORMANCE_DATA {
            assert!(point.standard > 0, "{}", point.month);
            assert!(point.aav > 0, "{}", point.month);
        }
    }

    #[test]
    fn news_items_have_all_fields() {
        for item in &LATEST_NEWS {
            assert!(!item.title.is_empty());
            assert!(!item.date.is_empty());
            assert!(!item.category.is_empty());
            assert!(!item.image_url.is_empty());
        }
    }
}
