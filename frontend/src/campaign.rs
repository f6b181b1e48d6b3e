use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Tokyo;
use serde::Serialize;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Progress {
    pub goal: i64,
    pub current: i64,
    pub backers: u32,
    /// Last day of the campaign, in JST.
    pub end_at: NaiveDate,
    pub backers_last_24h: Option<u32>,
}

impl Progress {
    /// Funded share of the goal, clamped to 0..=100.
    pub fn percent(&self) -> f64 {
        if self.goal <= 0 {
            return 0.0;
        }
        clamp_pct(self.current as f64 / self.goal as f64 * 100.0)
    }

    pub fn remaining_amount(&self) -> i64 {
        (self.goal - self.current).max(0)
    }

    /// Whole days until 23:59:59 JST on `end_at`, rounded up, never negative.
    pub fn remaining_days(&self, now: DateTime<Utc>) -> i64 {
        let Some(deadline) = self
            .end_at
            .and_hms_opt(23, 59, 59)
            .and_then(|end| Tokyo.from_local_datetime(&end).single())
        else {
            return 0;
        };
        let diff_ms = (deadline.with_timezone(&Utc) - now).num_milliseconds();
        if diff_ms <= 0 {
            return 0;
        }
        (diff_ms + MS_PER_DAY - 1) / MS_PER_DAY
    }

    pub fn end_at_label(&self) -> String {
        self.end_at.format("%Y/%m/%d").to_string()
    }
}

pub fn clamp_pct(p: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 100.0)
}

/// Groups digits the way ja-JP does: 1420000 -> "1,420,000".
pub fn yen(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnTone {
    Light,
    Mid,
    Deep,
    Kekkai,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct Grant {
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct ReturnItem {
    pub step: &'static str,
    pub price: i64,
    pub role: &'static str,
    pub cta_label: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub checkout_url: Option<&'static str>,
    pub thumb_src: Option<&'static str>,
    pub thumb_alt: &'static str,
    pub grants: Vec<Grant>,
    pub note: Option<&'static str>,
    pub kekkai_badge: bool,
    pub premium: bool,
    pub passage_rite: bool,
    /// Heading and button text for the passage-rite block.
    pub inner_cta_heading: Option<&'static str>,
    pub inner_cta: Option<&'static str>,
    pub tone: ReturnTone,
}

impl ReturnItem {
    pub fn is_kekkai(&self) -> bool {
        self.tone == ReturnTone::Kekkai
    }
}

pub fn progress() -> Progress {
    Progress {
        goal: 3_800_000,
        current: 1_420_000,
        backers: 23,
        end_at: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap_or_default(),
        backers_last_24h: None,
    }
}

pub const STEP3_CHECKOUT_URL: &str = "https://buy.stripe.com/cNi9ASfr0eT4bdB6wj5gc07";

const fn grant(name: &'static str, desc: &'static str) -> Grant {
    Grant { name, desc }
}

/// Pledge tiers, in order of how deep the relationship goes.
pub fn returns() -> Vec<ReturnItem> {
    vec![
        ReturnItem {
            step: "STEP 0",
            price: 8_800,
            role: "観測者",
            cta_label: "想いを送る",
            title: "感謝の言霊メッセージ",
            subtitle: Some("今は遠くからでも、この渦にエネルギーを添えたいあなたへ。"),
            checkout_url: Some("https://buy.stripe.com/cNi3cu3Ii4eqbdBbQD5gc0c"),
            thumb_src: Some("/images/returns/step0.jpg"),
            thumb_alt: "感謝の言霊",
            grants: vec![
                grant(
                    "付与するもの 01｜感謝の言霊",
                    "あなたのお名前を呼んだ“感謝の言霊”動画をお届けします。",
                ),
                grant(
                    "付与するもの 02｜名の記録",
                    "HP「Special Thanks」へお名前掲載（希望者のみ）。",
                ),
            ],
            note: None,
            kekkai_badge: false,
            premium: false,
            passage_rite: false,
            inner_cta_heading: None,
            inner_cta: None,
            tone: ReturnTone::Light,
        },
        ReturnItem {
            step: "STEP 1",
            price: 33_000,
            role: "参加者",
            cta_label: "名前を刻む",
            title: "【刻印】サロン内プレート & 開門神事参加",
            subtitle: Some("この城に「自分も関わった」という証を残したい人へ。"),
            checkout_url: Some("https://buy.stripe.com/8x25kC3Ii26i95tcUH5gc0b"),
            thumb_src: Some("/images/returns/step1.jpg"),
            thumb_alt: "刻印と開門",
            grants: vec![
                grant(
                    "付与するもの 01｜刻印",
                    "サロン内ネームプレートへあなたの名を刻みます。",
                ),
                grant(
                    "付与するもの 02｜開門神事",
                    "開門の瞬間に立ち会う（現地参加 or オンライン中継）。",
                ),
            ],
            note: None,
            kekkai_badge: false,
            premium: false,
            passage_rite: false,
            inner_cta_heading: None,
            inner_cta: None,
            tone: ReturnTone::Light,
        },
        ReturnItem {
            step: "STEP 2",
            price: 55_000,
            role: "仲間",
            cta_label: "一緒に作る",
            title: "【共創】光庭DIY参加 & 直会",
            subtitle: Some("使う前に、まず一緒に作る。"),
            checkout_url: Some("https://buy.stripe.com/7sYcN46UuaCOa9x6wj5gc0a"),
            thumb_src: Some("/images/returns/step2.jpg"),
            thumb_alt: "共創と直会",
            grants: vec![
                grant(
                    "付与するもの 01｜共創参加",
                    "内装DIYに参加（壁塗装・簡単な施工・仕上げなど安全範囲）。",
                ),
                grant(
                    "付与するもの 02｜直会",
                    "作業後の直会（軽食）で“場の始まり”を共有します。",
                ),
                grant(
                    "付与するもの 03｜記念記録",
                    "記念写真＆データ共有。サロン内「共創者名簿」掲載（希望者）。",
                ),
            ],
            note: Some("※ 汚れてもいい服装でご参加ください / 作業は安全な範囲に限定します"),
            kekkai_badge: false,
            premium: false,
            passage_rite: false,
            inner_cta_heading: None,
            inner_cta: None,
            tone: ReturnTone::Mid,
        },
        ReturnItem {
            step: "STEP 3",
            price: 330_000,
            role: "結界庭守｜調律位",
            cta_label: "結界側へ入る",
            title: "【鍵石】スマート・タリスマン プレミアム",
            subtitle: Some("利用者ではなく、この場を共に整え、守り、育てていく人へ。"),
            checkout_url: Some(STEP3_CHECKOUT_URL),
            thumb_src: Some("/images/returns/step3ver2.png"),
            thumb_alt: "結界庭守｜調律位",
            grants: vec![
                grant(
                    "付与するもの 01｜鍵石（オーダーメイド）",
                    "パワーストーンのブレスレットをオーダーメイド制作。石はすべて植草が選定・浄化し、あなた専用の“鍵石”に仕立てます。",
                ),
                grant(
                    "付与するもの 02｜ICチップ内蔵",
                    "ブレスレット内部にICチップを内蔵。タリスマンとして“通過”を物理的にも記録できる設計へ。",
                ),
                grant(
                    "付与するもの 03｜言霊注入",
                    "タリスマンへ言霊を注入。あなた・石・光庭の相互作用が起きる状態へ整えます。",
                ),
                grant(
                    "付与するもの 04｜月次調律儀（全12回）",
                    "毎月1回、あなた・石・光庭を再調律。来店／郵送どちらも対応します。",
                ),
                grant(
                    "付与するもの 05｜会員権（創設メンバー）",
                    "光庭 会員権（創設メンバー）付与。最初の6ヶ月は月額無料、7ヶ月目以降は通常月額へ。",
                ),
                grant(
                    "付与するもの 06｜最優先共有",
                    "空間アップデート情報を最優先で共有。結界庭守名簿への記載（希望者）。",
                ),
            ],
            note: Some("※ ここから先は「利用」ではなく「維持」の領域です"),
            kekkai_badge: true,
            premium: true,
            passage_rite: true,
            inner_cta_heading: Some("結界庭守への通過儀"),
            inner_cta: Some("結界側へ入る"),
            tone: ReturnTone::Kekkai,
        },
        ReturnItem {
            step: "STEP 4",
            price: 480_000,
            role: "結界庭守｜記録位",
            cta_label: "最初の証人になる",
            title: "こけら落とし特別枠（結界庭守＋個人セッション）",
            subtitle: Some("結界側に入ったうえで、最初に深く“通過する”証へ。"),
            checkout_url: Some("https://buy.stripe.com/aFa5kC2Ee3am2H53k75gc08"),
            thumb_src: Some("/images/returns/step4.jpg"),
            thumb_alt: "結界庭守｜記録位",
            grants: vec![
                grant(
                    "付与するもの 01｜結界庭守（STEP3）フルセット",
                    "STEP3（鍵石・月次調律儀・会員権など）をすべて含みます。",
                ),
                grant(
                    "付与するもの 02｜個人セッション（150分×2回）",
                    "完成後に優先日程で調整。深い通過のための2回構成。",
                ),
                grant("付与するもの 03｜記録データ", "セッション録音データをお渡しします。"),
                grant(
                    "付与するもの 04｜初回優先枠",
                    "こけら落とし期の特別枠（限定枠・人数は後で確定でOK）。",
                ),
            ],
            note: None,
            kekkai_badge: true,
            premium: false,
            passage_rite: false,
            inner_cta_heading: None,
            inner_cta: None,
            tone: ReturnTone::Kekkai,
        },
        ReturnItem {
            step: "STEP 5",
            price: 770_000,
            role: "結界庭守｜維持位",
            cta_label: "維持位として参画する",
            title: "維持位（場を倒さない人）｜貸切 & 直会",
            subtitle: Some("前に立たず、名を主張せず、それでもこの結界が続く理由になる人へ。"),
            checkout_url: Some("https://buy.stripe.com/aFaeVc92C9yKbdB7An5gc09"),
            thumb_src: Some("/images/returns/step5.jpg"),
            thumb_alt: "結界庭守｜維持位",
            grants: vec![
                grant(
                    "付与するもの 01｜光庭の貸切利用",
                    "用途は応相談。あなたの目的に合わせて場を開きます。",
                ),
                grant(
                    "付与するもの 02｜当日の全面サポート",
                    "植草が“黒子”に回り、場の設計と運用を支えます。",
                ),
                grant(
                    "付与するもの 03｜直会",
                    "食事を共にし、結界の維持に必要な“温度”を共有します。",
                ),
                grant("付与するもの 04｜最優先共有", "空間アップデート情報を最優先で共有します。"),
            ],
            note: Some("※ ここは“支援”ではなく「結界を倒さない役割」への参加です"),
            kekkai_badge: true,
            premium: false,
            passage_rite: false,
            inner_cta_heading: None,
            inner_cta: None,
            tone: ReturnTone::Kekkai,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress_with(goal: i64, current: i64) -> Progress {
        Progress {
            goal,
            current,
            ..progress()
        }
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(progress_with(200, 50).percent(), 25.0);
        assert_eq!(progress_with(100, 250).percent(), 100.0);
        assert_eq!(progress_with(100, -5).percent(), 0.0);
        assert_eq!(progress_with(0, 10).percent(), 0.0);
        assert_eq!(clamp_pct(f64::NAN), 0.0);
    }

    #[test]
    fn remaining_amount_never_negative() {
        assert_eq!(progress().remaining_amount(), 2_380_000);
        assert_eq!(progress_with(100, 120).remaining_amount(), 0);
    }

    #[test]
    fn yen_groups_thousands() {
        assert_eq!(yen(0), "0");
        assert_eq!(yen(999), "999");
        assert_eq!(yen(8_800), "8,800");
        assert_eq!(yen(1_420_000), "1,420,000");
        assert_eq!(yen(-33_000), "-33,000");
    }

    #[test]
    fn remaining_days_counts_to_end_of_day_in_jst() {
        let p = progress();
        // 2026-03-15 23:59:59 JST == 2026-03-15 14:59:59 UTC
        let last_second = Utc.with_ymd_and_hms(2026, 3, 15, 14, 59, 58).unwrap();
        assert_eq!(p.remaining_days(last_second), 1);

        let after = Utc.with_ymd_and_hms(2026, 3, 15, 15, 0, 0).unwrap();
        assert_eq!(p.remaining_days(after), 0);

        // midnight JST on the 14th, 47:59:59 left
        let day_before = Utc.with_ymd_and_hms(2026, 3, 13, 15, 0, 0).unwrap();
        assert_eq!(p.remaining_days(day_before), 2);

        let long_after = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(p.remaining_days(long_after), 0);
    }

    #[test]
    fn end_label_is_zero_padded() {
        assert_eq!(progress().end_at_label(), "2026/03/15");
    }

    #[test]
    fn tiers_are_ordered_and_linked() {
        let tiers = returns();
        assert_eq!(tiers.len(), 6);
        assert!(tiers.windows(2).all(|w| w[0].price < w[1].price));
        for (i, tier) in tiers.iter().enumerate() {
            assert_eq!(tier.step, format!("STEP {}", i));
            assert!(tier
                .checkout_url
                .map_or(false, |url| url.starts_with("https://buy.stripe.com/")));
            assert_eq!(tier.kekkai_badge, tier.is_kekkai());
        }
        assert_eq!(tiers.iter().filter(|t| t.passage_rite).count(), 1);
    }

    #[test]
    fn progress_serializes_for_debug_dump() {
        let json = serde_json::to_value(progress()).unwrap();
        assert_eq!(json["end_at"], "2026-03-15");
        assert_eq!(json["backers_last_24h"], serde_json::Value::Null);
        let tier = serde_json::to_value(&returns()[3]).unwrap();
        assert_eq!(tier["tone"], "KEKKAI");
    }
}
