//! News source catalog: each source carries its ordered headline list.
//!
//! Headlines have no intrinsic ids; the projection layer synthesizes
//! `<sourceId>-<index>` ids which stay stable as long as a source's list is
//! unchanged.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsHeadline {
    pub title: &'static str,
    pub summary: &'static str,
    pub time_ago: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsSource {
    pub id: &'static str,
    pub label: &'static str,
    pub region: &'static str,
    pub headlines: &'static [NewsHeadline],
}

pub fn news_sources() -> &'static [NewsSource] {
    &NEWS_SOURCES
}

static NEWS_SOURCES: [NewsSource; 7] = [
    NewsSource {
        id: "reuters",
        label: "로이터",
        region: "글로벌",
        headlines: &[
            NewsHeadline {
                title: "글로벌 펀드, 3분기 아시아 주식 비중 확대",
                summary: "대형 운용사들이 밸류에이션 매력을 이유로 아시아 증시 비중을 늘리고 있습니다.",
                time_ago: "10분 전",
            },
            NewsHeadline {
                title: "국제 유가, 공급 우려 완화에 이틀째 하락",
                summary: "중동 리스크 프리미엄이 축소되며 브렌트유가 배럴당 84달러 아래로 내려왔습니다.",
                time_ago: "35분 전",
            },
            NewsHeadline {
                title: "구리 가격 사상 최고치 경신, 전력망 투자 수요 견인",
                summary: "AI 데이터센터와 신재생 전력망 확충이 구리 수요 전망을 끌어올렸습니다.",
                time_ago: "1시간 전",
            },
        ],
    },
    NewsSource {
        id: "bloomberg",
        label: "블룸버그",
        region: "미국",
        headlines: &[
            NewsHeadline {
                title: "연준 인사, 연내 두 차례 인하 여지 시사",
                summary: "물가 둔화 추세가 확인되면 완화 속도를 높일 수 있다는 발언이 나왔습니다.",
                time_ago: "15분 전",
            },
            NewsHeadline {
                title: "빅테크 실적 시즌 개막, 옵션 시장 변동성 베팅 급증",
                summary: "주요 종목의 실적 발표 주간을 앞두고 스트래들 수요가 크게 늘었습니다.",
                time_ago: "40분 전",
            },
            NewsHeadline {
                title: "미 국채 2년물 금리, 고용 지표 앞두고 4.6% 돌파",
                summary: "탄탄한 고용이 확인될 경우 인하 기대가 후퇴할 수 있다는 경계감이 반영됐습니다.",
                time_ago: "2시간 전",
            },
        ],
    },
    NewsSource {
        id: "ft",
        label: "파이낸셜타임스",
        region: "영국",
        headlines: &[
            NewsHeadline {
                title: "유럽 증시, 방산·인프라 중심 자금 유입 지속",
                summary: "역내 재정 확대 기조가 산업재 섹터의 상대 강세를 이끌고 있습니다.",
                time_ago: "22분 전",
            },
            NewsHeadline {
                title: "영란은행, 금리 동결 속 양적긴축 속도 조절 검토",
                summary: "길트 시장 유동성 여건을 감안해 국채 매각 속도를 늦출 수 있다고 밝혔습니다.",
                time_ago: "1시간 전",
            },
            NewsHeadline {
                title: "런던 IPO 시장 회복 조짐, 대형 상장 3건 대기",
                summary: "상장 규정 개편 이후 첫 대형 테크 상장이 추진되고 있습니다.",
                time_ago: "3시간 전",
            },
        ],
    },
    NewsSource {
        id: "yonhap",
        label: "연합뉴스",
        region: "한국",
        headlines: &[
            NewsHeadline {
                title: "코스피 외국인 5거래일 연속 순매수",
                summary: "반도체 업황 회복 기대에 외국인 자금이 대형주로 유입되고 있습니다.",
                time_ago: "8분 전",
            },
            NewsHeadline {
                title: "정부, 밸류업 세제 인센티브 세부안 발표",
                summary: "배당 확대 기업에 대한 법인세·배당소득세 경감 방안이 공개됐습니다.",
                time_ago: "50분 전",
            },
            NewsHeadline {
                title: "원/달러 환율 1,340원대 공방, 당국 미세조정 경계",
                summary: "수출업체 네고 물량과 결제 수요가 맞서며 좁은 박스권이 이어졌습니다.",
                time_ago: "2시간 전",
            },
        ],
    },
    NewsSource {
        id: "nikkei",
        label: "닛케이",
        region: "일본",
        headlines: &[
            NewsHeadline {
                title: "일본은행, 국채 매입 감액 일정 구체화",
                summary: "시장 기능 회복을 위해 분기별 감액 규모를 확대하는 방안이 논의됐습니다.",
                time_ago: "30분 전",
            },
            NewsHeadline {
                title: "엔화 약세에 수출주 강세, 닛케이 4만선 재돌파",
                summary: "자동차·기계 업종이 지수 상승을 주도했습니다.",
                time_ago: "1시간 전",
            },
            NewsHeadline {
                title: "도쿄 증시 자사주 매입 공시 사상 최대치",
                summary: "거버넌스 개혁 압박 속에 주주환원 확대가 이어지고 있습니다.",
                time_ago: "4시간 전",
            },
        ],
    },
    NewsSource {
        id: "scmp",
        label: "사우스차이나모닝포스트",
        region: "홍콩",
        headlines: &[
            NewsHeadline {
                title: "항셍지수, 본토 자금 남하에 연중 최고치",
                summary: "강구퉁을 통한 본토 개인 자금 유입이 3주째 이어지고 있습니다.",
                time_ago: "18분 전",
            },
            NewsHeadline {
                title: "홍콩 거래소, 파생 상품 거래 시간 연장 추진",
                summary: "아시아 시간대 헤지 수요를 흡수하기 위한 개편안을 공개했습니다.",
                time_ago: "1시간 전",
            },
            NewsHeadline {
                title: "중국 부동산 개발사 구조조정안 합의 임박",
                summary: "주요 채권단이 출자전환 비율에 잠정 합의한 것으로 전해졌습니다.",
                time_ago: "5시간 전",
            },
        ],
    },
    NewsSource {
        id: "caixin",
        label: "차이신",
        region: "중국",
        headlines: &[
            NewsHeadline {
                title: "중국 제조업 PMI 3개월 만에 확장 국면 복귀",
                summary: "신규 수출 주문이 개선되며 경기 바닥 통과 기대가 커졌습니다.",
                time_ago: "25분 전",
            },
            NewsHeadline {
                title: "인민은행, 지준율 추가 인하 시사",
                summary: "실물 경제 지원을 위해 유동성 공급 수단을 총동원하겠다고 밝혔습니다.",
                time_ago: "2시간 전",
            },
            NewsHeadline {
                title: "위안화 국제 결제 비중 사상 최고",
                summary: "일대일로 교역 확대에 힘입어 위안화 결제 점유율이 상승했습니다.",
                time_ago: "6시간 전",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_ids_are_unique() {
        let list = news_sources();
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_source_has_headlines() {
        assert!(news_sources().iter().all(|s| !s.headlines.is_empty()));
    }
}
