//! Community board and post catalogs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityBoard {
    pub slug: &'static str,
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub topics: &'static [&'static str],
    pub members: &'static str,
    pub posts_today: u32,
    pub pinned: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommunityPost {
    pub id: &'static str,
    pub board_slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub author: &'static str,
    pub posted_at: &'static str,
    pub likes: u32,
    pub comments: u32,
    pub sentiment: Sentiment,
    pub tags: &'static [&'static str],
}

pub fn community_boards() -> &'static [CommunityBoard] {
    &COMMUNITY_BOARDS
}

pub fn featured_community_posts() -> &'static [CommunityPost] {
    &FEATURED_COMMUNITY_POSTS
}

static COMMUNITY_BOARDS: [CommunityBoard; 8] = [
    CommunityBoard {
        slug: "coin",
        title: "코인",
        emoji: "₿",
        description: "온체인 흐름, 신규 토큰 이슈, 현물/선물 전략을 실시간으로 공유합니다.",
        topics: &["온체인데이터", "파생상품", "에어드롭"],
        members: "18.2K",
        posts_today: 72,
        pinned: Some("차세대 레이어2 모니터링 시트"),
    },
    CommunityBoard {
        slug: "kr-stock",
        title: "국내주식",
        emoji: "📈",
        description: "업종/테마별 실적 전망과 관심 종목을 토론합니다.",
        topics: &["2차전지", "반도체", "엔터"],
        members: "21.8K",
        posts_today: 87,
        pinned: Some("7월 실적발표 캘린더"),
    },
    CommunityBoard {
        slug: "us-stock",
        title: "해외주식",
        emoji: "🌍",
        description: "미국·유럽 증시 주요 종목 실적 요약과 ETF 포지셔닝 아이디어를 정리합니다.",
        topics: &["빅테크", "ETF", "거시"],
        members: "9.7K",
        posts_today: 28,
        pinned: Some("메가캡 실적 하이라이트"),
    },
    CommunityBoard {
        slug: "staking",
        title: "스테이킹",
        emoji: "🔒",
        description: "LST, 리퀴드 리스택킹, 거버넌스 리워드를 비교 분석합니다.",
        topics: &["ETH LST", "리퀴드리스타킹", "슬래싱"],
        members: "7.4K",
        posts_today: 31,
        pinned: Some("메이저 체인 APR 비교 차트"),
    },
    CommunityBoard {
        slug: "bond",
        title: "채권",
        emoji: "🏛️",
        description: "국채·회사채 스프레드, 듀레이션 전략, 금리 선물 포지션을 토론합니다.",
        topics: &["듀레이션", "크레딧", "선물"],
        members: "5.9K",
        posts_today: 22,
        pinned: Some("미국채 커브 인버전 대응 전략"),
    },
    CommunityBoard {
        slug: "usd",
        title: "달러",
        emoji: "💵",
        description: "달러 인덱스와 주요 통화 페어의 포지셔닝을 다룹니다.",
        topics: &["DXY", "FOMC", "캐리"],
        members: "4.3K",
        posts_today: 17,
        pinned: None,
    },
    CommunityBoard {
        slug: "defi",
        title: "디파이",
        emoji: "🌀",
        description: "프로토콜 수익률, 리스택킹, 신규 거버넌스 제안을 추적합니다.",
        topics: &["APR", "리스택킹", "거버넌스"],
        members: "6.1K",
        posts_today: 24,
        pinned: Some("주요 풀 TVL 대시보드"),
    },
    CommunityBoard {
        slug: "auction",
        title: "경매",
        emoji: "🔨",
        description: "법원 경매 물건 분석과 낙찰가율 동향을 공유합니다.",
        topics: &["낙찰가율", "권리분석", "임장"],
        members: "3.2K",
        posts_today: 11,
        pinned: None,
    },
];

static FEATURED_COMMUNITY_POSTS: [CommunityPost; 5] = [
    CommunityPost {
        id: "c-post-1",
        board_slug: "coin",
        title: "온체인 유동성 이동 — 알트 시즌 신호?",
        summary: "주요 거래소 간 스테이블 유입량을 추적해 보니 4월 이후 가장 큰 규모가 관측됩니다. 레이어2 가스비도 다시 올라가는 중.",
        author: "Operator_J",
        posted_at: "2시간 전",
        likes: 142,
        comments: 37,
        sentiment: Sentiment::Bullish,
        tags: &["#온체인", "#레이어2"],
    },
    CommunityPost {
        id: "c-post-2",
        board_slug: "kr-stock",
        title: "2차전지 재료단 원가 압박 완화",
        summary: "탄산리튬 톤당 1만5천달러선에서 박스권. 양극재 업체별 스프레드가 벌어지기 시작했습니다. 3분기 마진 회복 베팅 관점 공유합니다.",
        author: "에쿼티리서치",
        posted_at: "4시간 전",
        likes: 96,
        comments: 22,
        sentiment: Sentiment::Bullish,
        tags: &["#2차전지", "#마진"],
    },
    CommunityPost {
        id: "c-post-3",
        board_slug: "usd",
        title: "7월 FOMC 전 달러 롱 포지션 압축",
        summary: "IMM 포지셔닝 기준 달러 순매수 잔량이 5주 연속 축소되었습니다. 105선 언저리에서 숏 커버 가능성 체크하세요.",
        author: "MacroNotes",
        posted_at: "6시간 전",
        likes: 68,
        comments: 18,
        sentiment: Sentiment::Neutral,
        tags: &["#달러", "#FOMC"],
    },
    CommunityPost {
        id: "c-post-4",
        board_slug: "defi",
        title: "리퀴드 리스택킹 풀 간 APR 비교표",
        summary: "EigenLayer 재스태킹 풀뿐 아니라 Karak·Symbiotic까지 비교표로 정리했습니다. 슬래싱 리스크도 간단히 메모했습니다.",
        author: "DeFi_Diary",
        posted_at: "1일 전",
        likes: 83,
        comments: 11,
        sentiment: Sentiment::Bullish,
        tags: &["#리스택킹", "#APR"],
    },
    CommunityPost {
        id: "c-post-5",
        board_slug: "auction",
        title: "서울 서북권 낙찰가율 2%p 하락",
        summary: "최근 4주 이동평균 기준 낙찰가율이 94%까지 내려왔습니다. 물건 수가 늘어난 만큼 입찰가 전략 조정이 필요해 보여요.",
        author: "현장러너",
        posted_at: "1일 전",
        likes: 41,
        comments: 9,
        sentiment: Sentiment::Bearish,
        tags: &["#경매", "#낙찰가율"],
    },
];
