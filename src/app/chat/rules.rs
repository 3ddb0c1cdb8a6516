//! 关键词规则表
//!
//! 规则按顺序匹配，第一条命中的规则决定话题；都不命中时使用默认回复。

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Product,
    Price,
    Quality,
    Battery,
    Greeting,
    Thanks,
    Recommendation,
    Purchase,
    Help,
    Fallback,
}

#[derive(Debug)]
pub struct ChatRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub responses: &'static [&'static str],
}

impl ChatRule {
    /// `message` 须已转为小写
    pub fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|keyword| message.contains(keyword))
    }
}

pub static RULES: [ChatRule; 9] = [
    ChatRule {
        topic: Topic::Product,
        keywords: &["headphone", "earphone", "earbud"],
        responses: &[
            "Kami punya berbagai macam headphone dan earbud premium! Ada yang lagi cari? Earbud ANC atau headphone over-ear?",
            "Nice choice! Kami ada koleksi headphone dan earbud dengan teknologi terbaru. Budget sekitar berapa yang Anda cari?",
            "Untuk headphone, saya rekomendasikan Arc Eclipse atau Pulse Mono. Untuk earbud, coba lihat Neon Pulse atau Noir Pulse. Ada yang tertarik?",
        ],
    },
    ChatRule {
        topic: Topic::Price,
        keywords: &["harga", "price", "berapa", "cost"],
        responses: &[
            "Harga produk kami bervariasi dari $159-$289. Ada produk tertentu yang mau ditanyakan harganya?",
            "Tergantung modelnya! Earbud mulai $159, headphone mulai $189. Mau tau harga produk spesifik?",
            "Budget Anda berapa? Saya bisa bantu rekomendasikan produk yang sesuai. Kami ada di semua range harga!",
        ],
    },
    ChatRule {
        topic: Topic::Quality,
        keywords: &["kualitas", "sound", "bass", "audio"],
        responses: &[
            "Sound quality produk kami top banget! Semua produk punya driver premium dan tuning khusus. Suka bass yang powerful atau vokal yang jernih?",
            "Audio adalah passion kami! Produk kami punya signature sound yang berbeda-beda. Ada yang bass-heavy, ada yang balanced. Preferensi Anda?",
            "Kualitas audio kami jempolan! Dengan driver dynamic dan chamber akustik khusus. Mau tahu tentang teknologi ANC atau sound signature?",
        ],
    },
    ChatRule {
        topic: Topic::Battery,
        keywords: &["baterai", "battery", "daya"],
        responses: &[
            "Battery life produk kami sangat baik! Earbud bisa 8 jam per charge, case bisa 40+ jam. Cukup untuk seharian penuh!",
            "Daya tahan baterai kami unggul! Headphone bisa 60+ jam, earbud 8 jam dengan case 40 jam. Ada yang butuh battery life ekstra?",
            "Semua produk punya fast charging dan battery life yang luar biasa. Mau tahu tentang wireless charging juga?",
        ],
    },
    ChatRule {
        topic: Topic::Greeting,
        keywords: &["halo", "hi", "hello", "hai"],
        responses: &[
            "Halo! Selamat datang di Taqdir Tech Audio. Ada yang bisa saya bantu hari ini?",
            "Hi there! Looking for the perfect audio gear? Saya siap bantu!",
            "Halo! Teman audio yang baik! Ada produk tertentu yang lagi Anda cari?",
        ],
    },
    ChatRule {
        topic: Topic::Thanks,
        keywords: &["terima kasih", "thanks", "thank"],
        responses: &[
            "Sama-sama! Senang bisa bantu. Ada lagi yang mau ditanyakan?",
            "You're welcome! Kalau ada pertanyaan lain, jangan ragu ya!",
            "Sama-sama! Happy shopping audio gear ya!",
        ],
    },
    ChatRule {
        topic: Topic::Recommendation,
        keywords: &["rekomendasi", "recommend", "saran"],
        responses: &[
            "Saya bisa kasih rekomendasi! Untuk daily use, saya sarankan Feather Air. Untuk gaming, coba Neon Pulse. Budget dan preferensi Anda seperti apa?",
            "Bisa banget! Berdasarkan kebutuhan Anda, apa yang paling penting? Battery life, sound quality, atau ANC?",
            "Tentu! Beri tahu saya budget dan kebutuhan Anda, saya akan rekomendasikan yang paling cocok!",
        ],
    },
    ChatRule {
        topic: Topic::Purchase,
        keywords: &["beli", "buy", "order", "pesan"],
        responses: &[
            "Untuk pembelian, Anda bisa langsung klik produk yang diinginkan atau hubungi tim kami. Ada produk yang mau dipesan?",
            "Ready stock! Anda bisa langsung checkout atau saya bantu prosesnya. Mau beli yang mana?",
            "Bisa banget! Klik produk yang Anda suka atau saya bantu carikan yang best untuk Anda. Ada yang mau dipesan sekarang?",
        ],
    },
    ChatRule {
        topic: Topic::Help,
        keywords: &["bantu", "help", "support"],
        responses: &[
            "Tentu saya bantu! Ada masalah dengan produk atau butuh rekomendasi?",
            "I'm here to help! Ada pertanyaan tentang produk atau teknologi audio?",
            "Siap bantu! Butuh info spesifikasi, komparasi, atau rekomendasi?",
        ],
    },
];

pub static FALLBACK_RESPONSES: [&str; 5] = [
    "Hmm, interesting! Bisa jelaskan lebih detail tentang yang Anda cari?",
    "Saya paham. Mau tahu tentang produk spesifik atau butuh rekomendasi umum?",
    "Baik! Ada produk tertentu dari Taqdir Tech Audio yang ingin Anda tahu lebih lanjut?",
    "Saya bantu ya! Coba sebutkan kata kunci: headphone, earbud, harga, atau rekomendasi.",
    "Nice! Apa Anda lagi cari audio gear untuk gaming, daily use, atau profesional?",
];

/// 判断消息所属话题
pub fn classify(message: &str) -> Topic {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&message))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::Fallback)
}

/// 话题对应的全部候选回复
pub fn responses_for(topic: Topic) -> &'static [&'static str] {
    RULES
        .iter()
        .find(|rule| rule.topic == topic)
        .map(|rule| rule.responses)
        .unwrap_or(&FALLBACK_RESPONSES)
}

/// 在话题候选回复中均匀随机选一条
pub fn respond<R: Rng + ?Sized>(message: &str, rng: &mut R) -> (Topic, &'static str) {
    let topic = classify(message);
    let reply = responses_for(topic)
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_RESPONSES[0]);
    (topic, reply)
}
