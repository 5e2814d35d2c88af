//! Static table of the 114 surahs

use super::types::{CatalogEntry, RevelationType};
use RevelationType::{Medinan, Meccan};

const fn entry(
    number: u16,
    native_name: &'static str,
    english_name: &'static str,
    english_translation: &'static str,
    ayah_count: u16,
    revelation_type: RevelationType,
) -> CatalogEntry {
    CatalogEntry {
        number,
        native_name,
        english_name,
        english_translation,
        ayah_count,
        revelation_type,
    }
}

pub static SURAHS: [CatalogEntry; 114] = [
    entry(1, "الفاتحة", "Al-Faatiha", "The Opening", 7, Meccan),
    entry(2, "البقرة", "Al-Baqara", "The Cow", 286, Medinan),
    entry(3, "آل عمران", "Aal-i-Imraan", "The Family of Imraan", 200, Medinan),
    entry(4, "النساء", "An-Nisaa", "The Women", 176, Medinan),
    entry(5, "المائدة", "Al-Maaida", "The Table", 120, Medinan),
    entry(6, "الأنعام", "Al-An'aam", "The Cattle", 165, Meccan),
    entry(7, "الأعراف", "Al-A'raaf", "The Heights", 206, Meccan),
    entry(8, "الأنفال", "Al-Anfaal", "The Spoils of War", 75, Medinan),
    entry(9, "التوبة", "At-Tawba", "The Repentance", 129, Medinan),
    entry(10, "يونس", "Yunus", "Jonas", 109, Meccan),
    entry(11, "هود", "Hud", "Hud", 123, Meccan),
    entry(12, "يوسف", "Yusuf", "Joseph", 111, Meccan),
    entry(13, "الرعد", "Ar-Ra'd", "The Thunder", 43, Medinan),
    entry(14, "إبراهيم", "Ibrahim", "Abraham", 52, Meccan),
    entry(15, "الحجر", "Al-Hijr", "The Rock", 99, Meccan),
    entry(16, "النحل", "An-Nahl", "The Bee", 128, Meccan),
    entry(17, "الإسراء", "Al-Israa", "The Night Journey", 111, Meccan),
    entry(18, "الكهف", "Al-Kahf", "The Cave", 110, Meccan),
    entry(19, "مريم", "Maryam", "Mary", 98, Meccan),
    entry(20, "طه", "Taa-Haa", "Taa-Haa", 135, Meccan),
    entry(21, "الأنبياء", "Al-Anbiyaa", "The Prophets", 112, Meccan),
    entry(22, "الحج", "Al-Hajj", "The Pilgrimage", 78, Medinan),
    entry(23, "المؤمنون", "Al-Muminoon", "The Believers", 118, Meccan),
    entry(24, "النور", "An-Noor", "The Light", 64, Medinan),
    entry(25, "الفرقان", "Al-Furqaan", "The Criterion", 77, Meccan),
    entry(26, "الشعراء", "Ash-Shu'araa", "The Poets", 227, Meccan),
    entry(27, "النمل", "An-Naml", "The Ant", 93, Meccan),
    entry(28, "القصص", "Al-Qasas", "The Stories", 88, Meccan),
    entry(29, "العنكبوت", "Al-Ankaboot", "The Spider", 69, Meccan),
    entry(30, "الروم", "Ar-Room", "The Romans", 60, Meccan),
    entry(31, "لقمان", "Luqman", "Luqman", 34, Meccan),
    entry(32, "السجدة", "As-Sajda", "The Prostration", 30, Meccan),
    entry(33, "الأحزاب", "Al-Ahzaab", "The Clans", 73, Medinan),
    entry(34, "سبإ", "Saba", "Sheba", 54, Meccan),
    entry(35, "فاطر", "Faatir", "The Originator", 45, Meccan),
    entry(36, "يس", "Ya-Sin", "Yaseen", 83, Meccan),
    entry(37, "الصافات", "As-Saaffaat", "Those drawn up in Ranks", 182, Meccan),
    entry(38, "ص", "Saad", "The letter Saad", 88, Meccan),
    entry(39, "الزمر", "Az-Zumar", "The Groups", 75, Meccan),
    entry(40, "غافر", "Ghafir", "The Forgiver", 85, Meccan),
    entry(41, "فصلت", "Fussilat", "Explained in detail", 54, Meccan),
    entry(42, "الشورى", "Ash-Shura", "Consultation", 53, Meccan),
    entry(43, "الزخرف", "Az-Zukhruf", "Ornaments of gold", 89, Meccan),
    entry(44, "الدخان", "Ad-Dukhaan", "The Smoke", 59, Meccan),
    entry(45, "الجاثية", "Al-Jaathiya", "Crouching", 37, Meccan),
    entry(46, "الأحقاف", "Al-Ahqaf", "The Dunes", 35, Meccan),
    entry(47, "محمد", "Muhammad", "Muhammad", 38, Medinan),
    entry(48, "الفتح", "Al-Fath", "The Victory", 29, Medinan),
    entry(49, "الحجرات", "Al-Hujuraat", "The Inner Apartments", 18, Medinan),
    entry(50, "ق", "Qaaf", "The letter Qaaf", 45, Meccan),
    entry(51, "الذاريات", "Adh-Dhaariyat", "The Winnowing Winds", 60, Meccan),
    entry(52, "الطور", "At-Tur", "The Mount", 49, Meccan),
    entry(53, "النجم", "An-Najm", "The Star", 62, Meccan),
    entry(54, "القمر", "Al-Qamar", "The Moon", 55, Meccan),
    entry(55, "الرحمن", "Ar-Rahmaan", "The Beneficent", 78, Medinan),
    entry(56, "الواقعة", "Al-Waaqia", "The Inevitable", 96, Meccan),
    entry(57, "الحديد", "Al-Hadid", "The Iron", 29, Medinan),
    entry(58, "المجادلة", "Al-Mujaadila", "The Pleading Woman", 22, Medinan),
    entry(59, "الحشر", "Al-Hashr", "The Exile", 24, Medinan),
    entry(60, "الممتحنة", "Al-Mumtahana", "She that is to be examined", 13, Medinan),
    entry(61, "الصف", "As-Saff", "The Ranks", 14, Medinan),
    entry(62, "الجمعة", "Al-Jumu'a", "Friday", 11, Medinan),
    entry(63, "المنافقون", "Al-Munaafiqoon", "The Hypocrites", 11, Medinan),
    entry(64, "التغابن", "At-Taghaabun", "Mutual Disillusion", 18, Medinan),
    entry(65, "الطلاق", "At-Talaaq", "Divorce", 12, Medinan),
    entry(66, "التحريم", "At-Tahrim", "The Prohibition", 12, Medinan),
    entry(67, "الملك", "Al-Mulk", "The Sovereignty", 30, Meccan),
    entry(68, "القلم", "Al-Qalam", "The Pen", 52, Meccan),
    entry(69, "الحاقة", "Al-Haaqqa", "The Reality", 52, Meccan),
    entry(70, "المعارج", "Al-Ma'aarij", "The Ascending Stairways", 44, Meccan),
    entry(71, "نوح", "Nooh", "Noah", 28, Meccan),
    entry(72, "الجن", "Al-Jinn", "The Jinn", 28, Meccan),
    entry(73, "المزمل", "Al-Muzzammil", "The Enshrouded One", 20, Meccan),
    entry(74, "المدثر", "Al-Muddaththir", "The Cloaked One", 56, Meccan),
    entry(75, "القيامة", "Al-Qiyaama", "The Resurrection", 40, Meccan),
    entry(76, "الإنسان", "Al-Insaan", "Man", 31, Medinan),
    entry(77, "المرسلات", "Al-Mursalaat", "The Emissaries", 50, Meccan),
    entry(78, "النبأ", "An-Naba", "The Announcement", 40, Meccan),
    entry(79, "النازعات", "An-Naazi'aat", "Those who drag forth", 46, Meccan),
    entry(80, "عبس", "Abasa", "He frowned", 42, Meccan),
    entry(81, "التكوير", "At-Takwir", "The Overthrowing", 29, Meccan),
    entry(82, "الانفطار", "Al-Infitaar", "The Cleaving", 19, Meccan),
    entry(83, "المطففين", "Al-Mutaffifin", "Defrauding", 36, Meccan),
    entry(84, "الانشقاق", "Al-Inshiqaaq", "The Splitting Open", 25, Meccan),
    entry(85, "البروج", "Al-Burooj", "The Constellations", 22, Meccan),
    entry(86, "الطارق", "At-Taariq", "The Morning Star", 17, Meccan),
    entry(87, "الأعلى", "Al-A'laa", "The Most High", 19, Meccan),
    entry(88, "الغاشية", "Al-Ghaashiya", "The Overwhelming", 26, Meccan),
    entry(89, "الفجر", "Al-Fajr", "The Dawn", 30, Meccan),
    entry(90, "البلد", "Al-Balad", "The City", 20, Meccan),
    entry(91, "الشمس", "Ash-Shams", "The Sun", 15, Meccan),
    entry(92, "الليل", "Al-Lail", "The Night", 21, Meccan),
    entry(93, "الضحى", "Ad-Dhuhaa", "The Morning Hours", 11, Meccan),
    entry(94, "الشرح", "Ash-Sharh", "The Consolation", 8, Meccan),
    entry(95, "التين", "At-Tin", "The Fig", 8, Meccan),
    entry(96, "العلق", "Al-Alaq", "The Clot", 19, Meccan),
    entry(97, "القدر", "Al-Qadr", "The Power, Fate", 5, Meccan),
    entry(98, "البينة", "Al-Bayyina", "The Evidence", 8, Medinan),
    entry(99, "الزلزلة", "Az-Zalzala", "The Earthquake", 8, Medinan),
    entry(100, "العاديات", "Al-Aadiyaat", "The Chargers", 11, Meccan),
    entry(101, "القارعة", "Al-Qaari'a", "The Calamity", 11, Meccan),
    entry(102, "التكاثر", "At-Takaathur", "Competition", 8, Meccan),
    entry(103, "العصر", "Al-Asr", "The Declining Day, Epoch", 3, Meccan),
    entry(104, "الهمزة", "Al-Humaza", "The Traducer", 9, Meccan),
    entry(105, "الفيل", "Al-Fil", "The Elephant", 5, Meccan),
    entry(106, "قريش", "Quraish", "Quraysh", 4, Meccan),
    entry(107, "الماعون", "Al-Maa'un", "Almsgiving", 7, Meccan),
    entry(108, "الكوثر", "Al-Kawthar", "Abundance", 3, Meccan),
    entry(109, "الكافرون", "Al-Kaafiroon", "The Disbelievers", 6, Meccan),
    entry(110, "النصر", "An-Nasr", "Divine Support", 3, Medinan),
    entry(111, "المسد", "Al-Masad", "The Palm Fibre", 5, Meccan),
    entry(112, "الإخلاص", "Al-Ikhlaas", "Sincerity", 4, Meccan),
    entry(113, "الفلق", "Al-Falaq", "The Dawn", 5, Meccan),
    entry(114, "الناس", "An-Naas", "Mankind", 6, Meccan),
];
