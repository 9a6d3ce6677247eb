//! Social platform catalog: each platform carries its own ordered post feed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialPost {
    pub id: &'static str,
    pub nickname: &'static str,
    pub handle: &'static str,
    pub content: &'static str,
    pub time_ago: &'static str,
    pub detail: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialPlatform {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub posts: &'static [SocialPost],
}

pub fn social_platforms() -> &'static [SocialPlatform] {
    &SOCIAL_PLATFORMS
}

static SOCIAL_PLATFORMS: [SocialPlatform; 2] = [
    SocialPlatform {
        id: "x",
        label: "X (Twitter)",
        description: "실시간 글로벌 인플루언서 메시지를 큐레이션합니다.",
        posts: &[
            SocialPost {
                id: "x-elonmusk",
                nickname: "Elon Musk",
                handle: "@elonmusk",
                content: "Starship 3 시험 비행 준비 완료. FAA 승인만 남았습니다. 보카치카는 오늘도 분주하네요.",
                time_ago: "8분 전",
                detail: "머스크는 스타십 3차 시험 비행을 위한 연료 주입 리허설이 성공적으로 끝났다고 전하며, 승인 직후 발사 일정을 공유하겠다고 밝혔습니다.",
                likes: 152_000,
                comments: 28_400,
                shares: 43_600,
            },
            SocialPost {
                id: "x-cathiewood",
                nickname: "Cathie Wood",
                handle: "@CathieDWood",
                content: "ARKK는 AI와 로보틱스 혁신주에 대한 비중을 다시 확대했습니다. 장기 성장 스토리를 믿습니다.",
                time_ago: "16분 전",
                detail: "캐시 우드는 아크인베스트의 최신 리밸런싱을 공유하며, AI와 자동화 분야의 생산성 혁명이 이제 막 시작됐다고 강조했습니다.",
                likes: 18_400,
                comments: 2_200,
                shares: 5_300,
            },
            SocialPost {
                id: "x-elonmusk-2",
                nickname: "Elon Musk",
                handle: "@elonmusk",
                content: "테슬라 FSD v13 OTA 배포가 곧 시작됩니다. 기존 대비 도시 주행이 크게 개선됐습니다.",
                time_ago: "18분 전",
                detail: "실도로 데이터 학습을 바탕으로 회피와 차선 변경 로직을 다시 설계했습니다. 북미 고객부터 순차적으로 배포합니다.",
                likes: 98_000,
                comments: 16_400,
                shares: 22_800,
            },
            SocialPost {
                id: "x-pompliano",
                nickname: "Anthony Pompliano",
                handle: "@APompliano",
                content: "비트코인 현물 ETF 순유입이 3주 연속 플러스입니다. 기관의 축적은 조용히 계속됩니다.",
                time_ago: "25분 전",
                detail: "폼플리아노는 ETF 일별 플로우 데이터를 인용하며, 변동성 구간에서도 장기 보유 주소의 물량이 늘고 있다고 분석했습니다.",
                likes: 12_700,
                comments: 1_800,
                shares: 3_900,
            },
            SocialPost {
                id: "x-raydalio",
                nickname: "Ray Dalio",
                handle: "@RayDalio",
                content: "부채 사이클의 후반부에서는 현금이 아니라 생산적인 자산이 안전합니다. 분산이 답입니다.",
                time_ago: "41분 전",
                detail: "달리오는 주요국 부채 부담과 통화 가치 희석을 짚으며, 지역과 자산군을 넓게 가져가는 전천후 포트폴리오를 다시 권했습니다.",
                likes: 22_300,
                comments: 3_100,
                shares: 7_600,
            },
            SocialPost {
                id: "x-michaelburry",
                nickname: "Michael Burry",
                handle: "@michaeljburry",
                content: "멀티플이 모든 걸 설명하던 시대는 끝났습니다. 현금흐름을 다시 보세요.",
                time_ago: "1시간 전",
                detail: "버리는 고평가 구간의 밸류에이션 리스크를 경고하며, 잉여현금흐름 대비 주가가 낮은 종목 스크리닝 기준을 공유했습니다.",
                likes: 15_900,
                comments: 4_400,
                shares: 5_100,
            },
        ],
    },
    SocialPlatform {
        id: "facebook",
        label: "페이스북",
        description: "투자자와 CEO들의 공식 페이스북 업데이트를 확인하세요.",
        posts: &[
            SocialPost {
                id: "fb-zuck",
                nickname: "Mark Zuckerberg",
                handle: "@zuck",
                content: "Llama 차기 모델의 멀티모달 성능이 내부 벤치마크를 크게 상회했습니다. 오픈소스로 공개합니다.",
                time_ago: "12분 전",
                detail: "저커버그는 추론 비용을 절반으로 낮춘 학습 파이프라인 개선을 소개하며, 개발자 생태계 확장을 위한 공개 일정을 예고했습니다.",
                likes: 45_200,
                comments: 6_800,
                shares: 9_100,
            },
            SocialPost {
                id: "fb-billgates",
                nickname: "Bill Gates",
                handle: "@BillGates",
                content: "차세대 소형모듈원전(SMR)이 데이터센터 전력 문제의 현실적인 해답이 될 수 있습니다.",
                time_ago: "33분 전",
                detail: "게이츠는 테라파워의 최근 착공 소식을 공유하며, AI 수요 증가에 따른 전력 인프라 투자의 중요성을 강조했습니다.",
                likes: 28_600,
                comments: 4_200,
                shares: 6_300,
            },
            SocialPost {
                id: "fb-satyanadella",
                nickname: "Satya Nadella",
                handle: "@satyanadella",
                content: "Copilot이 업무 흐름 전반에 통합되며 고객사 생산성 지표가 뚜렷하게 개선되고 있습니다.",
                time_ago: "55분 전",
                detail: "나델라는 분기 고객 사례를 인용해 반복 업무 자동화 효과를 설명하고, 산업별 특화 에이전트 로드맵을 공개했습니다.",
                likes: 19_800,
                comments: 2_500,
                shares: 4_000,
            },
            SocialPost {
                id: "fb-jensenhuang",
                nickname: "Jensen Huang",
                handle: "@jensenhuang",
                content: "가속 컴퓨팅은 선택이 아니라 필수입니다. 차세대 플랫폼은 추론 효율에 집중했습니다.",
                time_ago: "2시간 전",
                detail: "황은 신규 아키텍처의 와트당 추론 성능 개선 폭을 제시하며, 주요 클라우드 파트너의 도입 일정을 소개했습니다.",
                likes: 33_400,
                comments: 5_600,
                shares: 8_800,
            },
            SocialPost {
                id: "fb-richardbranson",
                nickname: "Richard Branson",
                handle: "@richardbranson",
                content: "위험을 감수하지 않는 것이 가장 큰 위험입니다. 새로운 모험을 곧 공개합니다.",
                time_ago: "3시간 전",
                detail: "브랜슨은 신사업 발표를 예고하며, 불확실성 속에서도 장기적인 브랜드 투자를 이어가는 이유를 설명했습니다.",
                likes: 11_200,
                comments: 1_300,
                shares: 2_100,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_ids_are_unique_and_ordered() {
        let ids: Vec<_> = social_platforms().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["x", "facebook"]);
    }

    #[test]
    fn every_platform_has_posts() {
        assert!(social_platforms().iter().all(|p| !p.posts.is_empty()));
    }
}
