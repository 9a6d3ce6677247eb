//! Market instrument catalog.

/// A chartable market instrument with a small embedded price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instrument {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub color: (u8, u8, u8),
    pub data: &'static [f64],
}

pub fn instruments() -> &'static [Instrument] {
    &INSTRUMENTS
}

// Sample time-series per instrument; a live build would stream these.
static INSTRUMENTS: [Instrument; 12] = [
    Instrument {
        id: "bitcoin",
        name: "비트코인",
        symbol: "BTC",
        color: (0xf7, 0x93, 0x1a),
        data: &[
            42000.0, 43000.0, 42800.0, 44500.0, 46000.0, 45500.0, 47000.0, 46800.0, 48000.0,
        ],
    },
    Instrument {
        id: "nasdaq",
        name: "나스닥",
        symbol: "IXIC",
        color: (0x29, 0x62, 0xff),
        data: &[
            15000.0, 15120.0, 15180.0, 15220.0, 15190.0, 15300.0, 15450.0, 15600.0, 15520.0,
        ],
    },
    Instrument {
        id: "kospi",
        name: "코스피",
        symbol: "KS11",
        color: (0x00, 0xc8, 0x53),
        data: &[
            2600.0, 2610.0, 2595.0, 2620.0, 2640.0, 2655.0, 2660.0, 2675.0, 2668.0,
        ],
    },
    Instrument {
        id: "nasdaq100",
        name: "나스닥 100",
        symbol: "NDX",
        color: (0x65, 0x1f, 0xff),
        data: &[
            18000.0, 18120.0, 18090.0, 18240.0, 18360.0, 18420.0, 18550.0, 18700.0, 18640.0,
        ],
    },
    Instrument {
        id: "sp500",
        name: "S&P 500",
        symbol: "SPX",
        color: (0xef, 0x53, 0x50),
        data: &[
            5200.0, 5225.0, 5215.0, 5240.0, 5260.0, 5285.0, 5290.0, 5310.0, 5300.0,
        ],
    },
    Instrument {
        id: "kosdaq",
        name: "코스닥",
        symbol: "KQ11",
        color: (0xff, 0x6d, 0x00),
        data: &[
            840.0, 845.0, 842.0, 848.0, 850.0, 855.0, 858.0, 861.0, 860.0,
        ],
    },
    Instrument {
        id: "usdkrw",
        name: "달러/원",
        symbol: "USD/KRW",
        color: (0x00, 0x83, 0x8f),
        data: &[
            1340.0, 1338.0, 1345.0, 1348.0, 1352.0, 1349.0, 1346.0, 1344.0, 1341.0,
        ],
    },
    Instrument {
        id: "ust10y",
        name: "미 10년물",
        symbol: "UST10Y",
        color: (0xff, 0xb3, 0x00),
        data: &[4.18, 4.22, 4.25, 4.21, 4.19, 4.24, 4.28, 4.26, 4.23],
    },
    Instrument {
        id: "ktb3y",
        name: "국고채 3년",
        symbol: "KTB3Y",
        color: (0x8d, 0x6e, 0x63),
        data: &[3.12, 3.10, 3.08, 3.11, 3.09, 3.06, 3.05, 3.07, 3.04],
    },
    Instrument {
        id: "wti",
        name: "WTI 원유",
        symbol: "WTI",
        color: (0x45, 0x5a, 0x64),
        data: &[
            78.2, 79.1, 78.6, 80.4, 81.2, 80.8, 82.0, 81.5, 82.7,
        ],
    },
    Instrument {
        id: "gold",
        name: "금",
        symbol: "XAU",
        color: (0xfd, 0xd8, 0x35),
        data: &[
            2320.0, 2328.0, 2335.0, 2330.0, 2342.0, 2355.0, 2349.0, 2361.0, 2370.0,
        ],
    },
    Instrument {
        id: "btc-dominance",
        name: "비트코인 도미넌스",
        symbol: "BTC.D",
        color: (0x7e, 0x57, 0xc2),
        data: &[54.2, 54.5, 54.1, 54.8, 55.3, 55.0, 55.6, 55.4, 55.9],
    },
];
