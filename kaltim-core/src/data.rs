//! Built-in content fixtures for the East Kalimantan guide.
//!
//! Regions, quizzes, folk stories, and the audio library, written once at
//! startup and never mutated. All cross-references (culture to region, clip
//! to category) are resolved by linear scans at query time.

use crate::catalog::{
    AspectTag, AudioCategory, AudioClip, Catalog, CategoryId, CultureItem, PhotoItem, Quiz,
    QuizOption, QuizQuestion, Region, Story,
};
use lazy_static::lazy_static;

lazy_static! {
    pub(crate) static ref BUILTIN: Catalog = build_catalog();
}

fn build_catalog() -> Catalog {
    Catalog {
        regions: build_regions(),
        quizzes: build_public_quizzes(),
        coded_quizzes: build_coded_quizzes(),
        stories: build_stories(),
        audio_categories: build_audio_categories(),
        audio_clips: build_audio_clips(),
    }
}

// ============================================================================
// Regions
// ============================================================================

fn build_regions() -> Vec<Region> {
    vec![
        Region::new(
            1,
            "Samarinda",
            "regions/samarinda.jpg",
            "Ibu kota Provinsi Kalimantan Timur yang berdiri di tepian Sungai Mahakam. \
             Samarinda dikenal sebagai Kota Tepian, pusat perdagangan dan pemerintahan \
             yang tumbuh dari permukiman pedagang Bugis pada abad ke-17.",
            "± 860.000 jiwa",
            "Tepian Sungai Mahakam, Kalimantan Timur",
        )
        .with_culture(vec![
            CultureItem::new(
                "Sarung Samarinda",
                "culture/sarung_samarinda.jpg",
                "Kain tenun khas yang ditenun dengan alat tradisional gedogan oleh \
                 penenun di Kampung Tenun, Samarinda Seberang. Motifnya diwariskan \
                 turun-temurun dari penenun Bugis.",
            ),
            CultureItem::new(
                "Amplang",
                "culture/amplang.jpg",
                "Kerupuk ikan pipih khas tepian yang dibuat dari ikan pipih atau \
                 tenggiri, oleh-oleh wajib dari Samarinda.",
            ),
            CultureItem::new(
                "Tari Jepen Tepian",
                "culture/jepen_tepian.jpg",
                "Tari pergaulan pesisir dengan iringan gambus dan ketipung, tumbuh \
                 di kampung-kampung sepanjang tepian kota.",
            ),
        ])
        .with_photos(vec![
            PhotoItem::new("photos/samarinda_islamic_center.jpg", AspectTag::Landscape)
                .with_caption("Masjid Islamic Center dari seberang sungai"),
            PhotoItem::new("photos/samarinda_tepian.jpg", AspectTag::Landscape)
                .with_caption("Tepian kota pada senja hari"),
            PhotoItem::new("photos/samarinda_kampung_tenun.jpg", AspectTag::Portrait),
        ])
        .with_facts(&[
            "Masjid Islamic Center Samarinda adalah salah satu masjid termegah di Asia Tenggara.",
            "Nama Samarinda diyakini berasal dari 'sama rendah', rumah rakit yang sama tingginya.",
            "Kampung Tenun di Samarinda Seberang masih menenun sarung dengan alat gedogan.",
        ]),
        Region::new(
            2,
            "Balikpapan",
            "regions/balikpapan.jpg",
            "Kota pelabuhan dan gerbang utama Kalimantan Timur. Balikpapan tumbuh \
             bersama industri minyak sejak pengeboran Sumur Mathilda tahun 1897 dan \
             kini menjadi kota jasa paling tertata di provinsi ini.",
            "± 700.000 jiwa",
            "Pesisir Teluk Balikpapan, Kalimantan Timur",
        )
        .with_culture(vec![
            CultureItem::new(
                "Kuliner Kepiting",
                "culture/kepiting_balikpapan.jpg",
                "Olahan kepiting bakau dari perairan teluk, dari kepiting saus \
                 hingga kepiting asap yang menjadi buah tangan khas.",
            ),
            CultureItem::new(
                "Batik Beruang Madu",
                "culture/batik_beruang_madu.jpg",
                "Batik kontemporer dengan motif beruang madu, satwa maskot kota, \
                 dikerjakan perajin lokal di sentra-sentra kecil.",
            ),
        ])
        .with_photos(vec![
            PhotoItem::new("photos/balikpapan_teluk.jpg", AspectTag::Landscape)
                .with_caption("Teluk Balikpapan dari kawasan Melawai"),
            PhotoItem::new("photos/balikpapan_mangrove.jpg", AspectTag::Square)
                .with_caption("Hutan mangrove Margomulyo"),
            PhotoItem::new("photos/balikpapan_margasari.jpg", AspectTag::Portrait),
        ])
        .with_facts(&[
            "Beruang madu, beruang terkecil di dunia, adalah maskot resmi Balikpapan.",
            "Balikpapan berkali-kali menerima penghargaan Adipura sebagai kota besar terbersih.",
            "Kota ini menjadi pintu gerbang menuju Ibu Kota Nusantara di Sepaku.",
        ]),
        Region::new(
            3,
            "Kutai Kartanegara",
            "regions/kutai_kartanegara.jpg",
            "Kabupaten di jantung aliran Sungai Mahakam dengan ibu kota Tenggarong. \
             Di sinilah berdiri Kesultanan Kutai Kartanegara Ing Martadipura, pewaris \
             nama kerajaan Hindu tertua di Nusantara.",
            "± 730.000 jiwa",
            "Hulu dan tengah aliran Sungai Mahakam",
        )
        .with_culture(vec![
            CultureItem::new(
                "Festival Erau",
                "culture/erau.jpg",
                "Pesta adat Kesultanan Kutai yang digelar di Tenggarong, ditutup \
                 upacara Mengulur Naga dan Belimbur di Sungai Mahakam.",
            ),
            CultureItem::new(
                "Tari Jepen",
                "culture/tari_jepen.jpg",
                "Tari pergaulan Melayu pesisir yang diiringi musik tingkilan, \
                 lazim dibawakan pada penyambutan tamu kesultanan.",
            ),
            CultureItem::new(
                "Museum Mulawarman",
                "culture/museum_mulawarman.jpg",
                "Bekas istana kesultanan di Tenggarong yang menyimpan singgasana, \
                 kalung Uncal, dan arca-arca peninggalan Kutai lama.",
            ),
        ])
        .with_photos(vec![
            PhotoItem::new("photos/kukar_museum.jpg", AspectTag::Landscape)
                .with_caption("Museum Mulawarman, Tenggarong"),
            PhotoItem::new("photos/kukar_jembatan.jpg", AspectTag::Landscape),
            PhotoItem::new("photos/kukar_erau.jpg", AspectTag::Square)
                .with_caption("Prosesi Mengulur Naga saat Erau"),
        ])
        .with_facts(&[
            "Prasasti Yupa dari Muara Kaman menandai kerajaan Hindu tertua di Indonesia.",
            "Erau berasal dari kata 'eroh' dalam bahasa Kutai yang berarti ramai.",
            "Pulau Kumala di tengah sungai dahulu adalah gosong pasir yang disulap jadi taman.",
        ]),
        Region::new(
            4,
            "Berau",
            "regions/berau.jpg",
            "Kabupaten pesisir utara dengan gugusan pulau karang Derawan, Maratua, \
             Kakaban, dan Sangalaki. Perairannya menjadi rumah penyu hijau dan \
             ubur-ubur tak menyengat yang terkenal ke mancanegara.",
            "± 280.000 jiwa",
            "Pesisir timur laut Kalimantan Timur",
        )
        .with_culture(vec![
            CultureItem::new(
                "Tari Dalling",
                "culture/tari_dalling.jpg",
                "Tarian masyarakat Bajau pesisir Berau yang dibawakan pada pesta \
                 laut dan penyambutan tamu.",
            ),
            CultureItem::new(
                "Batik Batiwakkal",
                "culture/batik_batiwakkal.jpg",
                "Batik khas Berau bermotif penyu, karang, dan pari manta dari \
                 perairan Derawan.",
            ),
        ])
        .with_photos(vec![
            PhotoItem::new("photos/berau_derawan.jpg", AspectTag::Landscape)
                .with_caption("Dermaga kayu Pulau Derawan"),
            PhotoItem::new("photos/berau_kakaban.jpg", AspectTag::Square)
                .with_caption("Danau ubur-ubur Kakaban"),
            PhotoItem::new("photos/berau_labuan_cermin.jpg", AspectTag::Portrait),
        ])
        .with_facts(&[
            "Danau Kakaban dihuni jutaan ubur-ubur yang kehilangan kemampuan menyengat.",
            "Labuan Cermin di Biduk-Biduk berair dua rasa, tawar di permukaan dan asin di dasar.",
            "Perairan Derawan adalah salah satu lokasi peneluran penyu hijau terbesar di Asia.",
        ]),
        Region::new(
            5,
            "Bontang",
            "regions/bontang.jpg",
            "Kota industri gas alam di pesisir timur dengan kampung-kampung atas air \
             yang berdiri di atas laut dangkal. Taman Nasional Kutai yang menjadi \
             habitat orangutan berbatasan langsung dengan kota.",
            "± 180.000 jiwa",
            "Pesisir timur Kalimantan Timur",
        )
        .with_culture(vec![
            CultureItem::new(
                "Bontang Kuala",
                "culture/bontang_kuala.jpg",
                "Kampung nelayan di atas air berusia ratusan tahun, seluruh jalannya \
                 berupa titian kayu ulin di atas laut.",
            ),
            CultureItem::new(
                "Pesta Laut",
                "culture/pesta_laut.jpg",
                "Syukuran tahunan nelayan Bontang Kuala atas hasil laut, diramaikan \
                 lomba perahu dan larung sesaji.",
            ),
        ])
        .with_photos(vec![
            PhotoItem::new("photos/bontang_kuala.jpg", AspectTag::Landscape)
                .with_caption("Titian ulin Bontang Kuala"),
            PhotoItem::new("photos/bontang_beras_basah.jpg", AspectTag::Square)
                .with_caption("Pulau Beras Basah"),
        ])
        .with_facts(&[
            "Bontang memiliki salah satu kilang gas alam cair terbesar di dunia.",
            "Rumah-rumah Bontang Kuala berdiri di atas tiang ulin yang awet di air asin.",
            "Gading-gading perahu nelayan masih dibuat tanpa gambar rancangan tertulis.",
        ]),
    ]
}

// ============================================================================
// Quizzes
// ============================================================================

fn build_public_quizzes() -> Vec<Quiz> {
    vec![
        Quiz::new(
            1,
            "Mengenal Kalimantan Timur",
            "Seberapa jauh kamu mengenal provinsi di timur Borneo ini?",
            "🗺️",
        )
        .with_questions(vec![
            QuizQuestion::new(
                101,
                "Apa ibu kota Provinsi Kalimantan Timur?",
                "Samarinda menjadi ibu kota provinsi sejak pembentukannya tahun 1957.",
            )
            .with_options(vec![
                QuizOption::incorrect(1, "Balikpapan"),
                QuizOption::correct(2, "Samarinda"),
                QuizOption::incorrect(3, "Tenggarong"),
                QuizOption::incorrect(4, "Bontang"),
            ]),
            QuizQuestion::new(
                102,
                "Sungai apa yang membelah Kota Samarinda?",
                "Sungai Mahakam sepanjang sekitar 920 km adalah sungai terpanjang \
                 di Kalimantan Timur.",
            )
            .with_options(vec![
                QuizOption::incorrect(1, "Sungai Barito"),
                QuizOption::incorrect(2, "Sungai Kapuas"),
                QuizOption::correct(3, "Sungai Mahakam"),
                QuizOption::incorrect(4, "Sungai Kayan"),
            ]),
            QuizQuestion::new(
                103,
                "Pesut adalah satwa khas perairan Kalimantan Timur. Hewan apakah pesut?",
                "Pesut adalah lumba-lumba air tawar yang kini hanya tersisa puluhan \
                 ekor di perairan hulu.",
            )
            .with_options(vec![
                QuizOption::incorrect(1, "Ikan berparuh"),
                QuizOption::incorrect(2, "Buaya air tawar"),
                QuizOption::correct(3, "Lumba-lumba air tawar"),
                QuizOption::incorrect(4, "Dugong"),
            ])
            .with_image("quiz/pesut.jpg"),
            QuizQuestion::new(
                104,
                "Di wilayah mana Ibu Kota Nusantara (IKN) dibangun?",
                "IKN dibangun di Sepaku, Kabupaten Penajam Paser Utara, bertetangga \
                 dengan Kutai Kartanegara.",
            )
            .with_options(vec![
                QuizOption::correct(1, "Penajam Paser Utara"),
                QuizOption::incorrect(2, "Kutai Barat"),
                QuizOption::incorrect(3, "Berau"),
                QuizOption::incorrect(4, "Paser"),
            ]),
        ]),
        Quiz::new(
            2,
            "Cerita Rakyat Kaltim",
            "Uji ingatanmu tentang legenda-legenda dari tepian sungai dan pesisir.",
            "📖",
        )
        .with_questions(vec![
            QuizQuestion::new(
                201,
                "Dalam legenda, pesut dipercaya berasal dari apa?",
                "Legenda menuturkan dua anak yang menceburkan diri ke sungai dan \
                 menjelma menjadi pesut.",
            )
            .with_options(vec![
                QuizOption::incorrect(1, "Sepasang naga penjaga sungai"),
                QuizOption::correct(2, "Anak manusia yang menjelma"),
                QuizOption::incorrect(3, "Perahu yang tenggelam"),
                QuizOption::incorrect(4, "Batu yang hanyut"),
            ]),
            QuizQuestion::new(
                202,
                "Legenda Danau Lipan berkisah tentang putri dari negeri mana?",
                "Aji Bidara Putih adalah putri penguasa Muara Kaman yang menolak \
                 pinangan pangeran dari negeri Cina.",
            )
            .with_options(vec![
                QuizOption::correct(1, "Muara Kaman"),
                QuizOption::incorrect(2, "Pasir Balengkong"),
                QuizOption::incorrect(3, "Berau"),
                QuizOption::incorrect(4, "Sambaliung"),
            ]),
            QuizQuestion::new(
                203,
                "Putri Karang Melenu dalam legenda Kutai ditemukan di dalam apa?",
                "Sang putri muncul dari buih sungai di dalam gong yang terapung, \
                 lalu menjadi permaisuri raja Kutai pertama.",
            )
            .with_options(vec![
                QuizOption::incorrect(1, "Bongkahan batu"),
                QuizOption::incorrect(2, "Rumpun bambu"),
                QuizOption::correct(3, "Gong yang terapung"),
                QuizOption::incorrect(4, "Sarang burung enggang"),
            ]),
        ]),
    ]
}

fn build_coded_quizzes() -> Vec<(String, Quiz)> {
    vec![
        (
            "RPN1234".to_string(),
            Quiz::new(
                101,
                "Kuis Budaya Kaltim 1",
                "Kuis budaya tingkat dasar untuk kelas budaya daerah.",
                "🎓",
            )
            .with_questions(vec![
                QuizQuestion::new(
                    1011,
                    "Pesta adat Kesultanan Kutai yang digelar setiap tahun di Tenggarong disebut?",
                    "Erau digelar sejak masa Aji Batara Agung dan ditutup dengan \
                     upacara Mengulur Naga.",
                )
                .with_options(vec![
                    QuizOption::incorrect(1, "Belian"),
                    QuizOption::correct(2, "Erau"),
                    QuizOption::incorrect(3, "Ngugu Tahun"),
                    QuizOption::incorrect(4, "Dahau"),
                ]),
                QuizQuestion::new(
                    1012,
                    "Kain tenun khas Samarinda Seberang dikenal dengan nama?",
                    "Sarung Samarinda ditenun dengan alat gedogan oleh keturunan \
                     penenun Bugis.",
                )
                .with_options(vec![
                    QuizOption::correct(1, "Sarung Samarinda"),
                    QuizOption::incorrect(2, "Ulap Doyo"),
                    QuizOption::incorrect(3, "Songket Paser"),
                    QuizOption::incorrect(4, "Kain Badong"),
                ]),
                QuizQuestion::new(
                    1013,
                    "Senjata tradisional suku Dayak yang bilahnya dihiasi ukiran disebut?",
                    "Mandau adalah parang adat Dayak; hulu dan sarungnya diukir \
                     dan dihiasi rambut serta bulu enggang.",
                )
                .with_options(vec![
                    QuizOption::incorrect(1, "Keris"),
                    QuizOption::incorrect(2, "Badik"),
                    QuizOption::incorrect(3, "Sumpit"),
                    QuizOption::correct(4, "Mandau"),
                ]),
                QuizQuestion::new(
                    1014,
                    "Alat musik petik khas Kutai yang mengiringi tari Jepen disebut?",
                    "Musik tingkilan dimainkan dengan gambus Kutai dan ketipung.",
                )
                .with_options(vec![
                    QuizOption::correct(1, "Gambus"),
                    QuizOption::incorrect(2, "Sampe"),
                    QuizOption::incorrect(3, "Sasando"),
                    QuizOption::incorrect(4, "Kecapi"),
                ]),
            ]),
        ),
        (
            "RPN5678".to_string(),
            Quiz::new(
                102,
                "Kuis Budaya Kaltim 2",
                "Kuis budaya tingkat lanjutan: seni dan arsitektur Dayak.",
                "🎓",
            )
            .with_questions(vec![
                QuizQuestion::new(
                    1021,
                    "Tari topeng Dayak Bahau dan Modang yang dibawakan saat musim tanam disebut?",
                    "Hudoq dibawakan dengan topeng kayu berwujud hama dan burung \
                     untuk memohon panen yang baik.",
                )
                .with_options(vec![
                    QuizOption::correct(1, "Hudoq"),
                    QuizOption::incorrect(2, "Kancet Papatai"),
                    QuizOption::incorrect(3, "Gantar"),
                    QuizOption::incorrect(4, "Leleng"),
                ]),
                QuizQuestion::new(
                    1022,
                    "Tenun suku Dayak Benuaq ditenun dari serat daun apa?",
                    "Ulap Doyo memakai serat daun doyo, sejenis pandan hutan yang \
                     tumbuh di pedalaman.",
                )
                .with_options(vec![
                    QuizOption::incorrect(1, "Daun nipah"),
                    QuizOption::correct(2, "Daun doyo"),
                    QuizOption::incorrect(3, "Daun pandan laut"),
                    QuizOption::incorrect(4, "Pelepah sagu"),
                ]),
                QuizQuestion::new(
                    1023,
                    "Rumah panjang adat Dayak di Kalimantan Timur disebut?",
                    "Lamin adalah rumah panjang yang dihuni puluhan keluarga, \
                     bertiang ulin dan berhias ukiran.",
                )
                .with_options(vec![
                    QuizOption::incorrect(1, "Betang"),
                    QuizOption::incorrect(2, "Baloy"),
                    QuizOption::correct(3, "Lamin"),
                    QuizOption::incorrect(4, "Banua"),
                ]),
            ]),
        ),
    ]
}

// ============================================================================
// Stories
// ============================================================================

fn build_stories() -> Vec<Story> {
    vec![
        // Four paragraphs; the narration screen leans on this one for its
        // longest sample.
        Story::new(
            1,
            "Legenda Pesut Mahakam",
            "Kutai Kartanegara",
            "stories/pesut_mahakam.jpg",
            "Dua anak yang lapar menceburkan diri ke sungai dan menjelma menjadi \
             pesut, lumba-lumba air tawar Mahakam.",
            "Pada zaman dahulu di sebuah kampung di tepian Mahakam, hiduplah \
             seorang ayah dengan dua anaknya. Setelah istrinya wafat, sang ayah \
             menikah lagi dengan perempuan yang tidak menyukai kedua anak itu. \
             Ketika musim paceklik tiba, ibu tiri itu semakin kerap membiarkan \
             mereka kelaparan.\n\n\
             Suatu hari sang ayah pergi jauh ke hulu mencari damar. Di rumah, ibu \
             tiri menanak nasi dan melarang kedua anak mendekat. Saat nasi masak \
             dan ibu tiri pergi ke ladang, kedua anak yang sudah berhari-hari \
             lapar menghabiskan nasi panas itu langsung dari kancah besarnya.\n\n\
             Karena takut dihukum, keduanya berlari ke tepian dan menceburkan diri \
             ke sungai. Panas nasi di dalam perut membuat mereka terus menyelam \
             mencari dingin. Lama-kelamaan kulit mereka melicin, kaki dan tangan \
             berubah menjadi sirip, dan keduanya menjelma menjadi ikan besar yang \
             menyembur-nyemburkan uap panas dari kepalanya.\n\n\
             Sang ayah yang pulang hanya sempat melihat dua ekor ikan besar timbul \
             tenggelam di depan rumahnya, seakan berpamitan. Sejak itulah orang \
             tepian menyebut ikan itu pesut, dan pantang menangkapnya karena \
             percaya pesut adalah jelmaan anak manusia.",
        )
        .with_audio_file("audio/stories/pesut_mahakam.mp3"),
        Story::new(
            2,
            "Putri Karang Melenu",
            "Kutai Kartanegara",
            "stories/karang_melenu.jpg",
            "Seorang putri muncul dari buih sungai di dalam gong terapung dan \
             menjadi permaisuri raja Kutai pertama.",
            "Di Hulu Dusun, sepasang petuah tua hidup tanpa anak. Pada suatu \
             malam hujan badai, mereka melihat cahaya turun ke sungai dan air \
             berbuih-buih seperti mendidih. Dari pusaran buih itu timbul sebuah \
             gong tembaga yang terapung-apung mendekati rakit mereka.\n\n\
             Di dalam gong itu mereka menemukan bayi perempuan yang duduk di atas \
             seekor naga kecil bergelung. Bayi itu mereka asuh dan diberi nama \
             Putri Karang Melenu. Ia tumbuh menjadi gadis yang kecantikannya \
             termasyhur sampai ke seberang-seberang sungai.\n\n\
             Ketika dewasa, sang putri dipersunting Aji Batara Agung Dewa Sakti, \
             raja pertama Kutai Kartanegara. Dari pasangan itulah raja-raja Kutai \
             menurunkan takhtanya, dan kisah sang putri dikenang setiap kali naga \
             tiruan diulurkan ke sungai pada puncak Erau.",
        )
        .with_audio_file("audio/stories/karang_melenu.mp3"),
        Story::new(
            3,
            "Legenda Danau Lipan",
            "Muara Kaman",
            "stories/danau_lipan.jpg",
            "Putri Aji Bidara Putih menolak pinangan pangeran seberang dan \
             mengerahkan lipan-lipan sakti menjaga negerinya.",
            "Muara Kaman dahulu adalah bandar besar yang diperintah seorang putri \
             bernama Aji Bidara Putih. Kecantikan dan kebijaksanaannya tersohor \
             hingga ke negeri seberang lautan, sampai seorang pangeran dari Cina \
             datang berlayar membawa jung penuh hadiah untuk meminangnya.\n\n\
             Sang putri menyuruh punggawanya menyelidiki sang pangeran di atas \
             jungnya. Punggawa itu pulang membawa kabar yang membuat sang putri \
             tersinggung, dan pinangan pun ditolak. Pangeran yang malu memilih \
             menyerang bandar pada malam harinya.\n\n\
             Terdesak, sang putri mengunyah sirih dan menyemburkannya ke arah \
             pasukan penyerang. Setiap sembur sirih menjelma menjadi ribuan lipan \
             raksasa yang menyerbu ke jung-jung itu hingga karam. Tempat jung itu \
             tenggelam kini menjadi danau yang dinamai orang Danau Lipan.",
        )
        .with_audio_file("audio/stories/danau_lipan.mp3"),
        Story::new(
            4,
            "Asal Usul Nama Balikpapan",
            "Balikpapan",
            "stories/balik_papan.jpg",
            "Papan-papan persembahan yang hanyut dan kembali ke pantai memberi \
             nama sebuah teluk.",
            "Tersebutlah Aji Muhammad, penguasa di Kerajaan Pasir, meminta \
             kampung-kampung pesisir menyumbang papan ulin untuk membangun \
             istana baru. Kampung di tepi teluk mengirimkan seribu papan pilihan \
             yang diikat menjadi rakit dan ditarik perahu menyusur pantai.\n\n\
             Di tengah perjalanan badai turun. Ikatan rakit terlepas dan sebagian \
             papan hanyut dibawa arus. Anehnya, papan-papan itu tidak hilang ke \
             laut lepas melainkan terdampar kembali ke pantai asalnya, tersusun \
             terbalik di atas pasir.\n\n\
             Penduduk yang menemukannya berseru bahwa papan-papan itu 'balik', \
             pulang sendiri ke kampungnya. Teluk tempat papan-papan itu kembali \
             kemudian disebut orang Balikpapan, nama yang dipakai hingga kini.",
        )
        .with_audio_file("audio/stories/balik_papan.mp3"),
    ]
}

// ============================================================================
// Audio library
// ============================================================================

fn build_audio_categories() -> Vec<AudioCategory> {
    vec![
        AudioCategory::new(1, "Salam & Sapaan", "🗣️"),
        AudioCategory::new(2, "Percakapan Sehari-hari", "💬"),
        AudioCategory::new(3, "Kosakata", "📖"),
        AudioCategory::new(4, "Lagu Daerah", "🎵"),
    ]
}

fn build_audio_clips() -> Vec<AudioClip> {
    vec![
        AudioClip::new(
            1,
            "Salam pembuka bahasa Kutai",
            "Bahasa Kutai",
            "0:11",
            CategoryId(1),
            "audio/clips/kutai_salam.mp3",
        )
        .with_description("Sapaan 'endi kabar' dan jawabannya dalam logat Tenggarong.")
        .with_speaker("Ibu Noorhayati, Tenggarong"),
        AudioClip::new(
            2,
            "Sapaan hormat Dayak Kenyah",
            "Bahasa Dayak Kenyah",
            "0:14",
            CategoryId(1),
            "audio/clips/kenyah_sapaan.mp3",
        )
        .with_speaker("Bapak Pejalan Ding, Desa Pampang"),
        AudioClip::new(
            3,
            "Menawar di pasar pagi",
            "Bahasa Banjar",
            "0:48",
            CategoryId(2),
            "audio/clips/banjar_pasar.mp3",
        )
        .with_description("Percakapan tawar-menawar sayur di Pasar Segiri, Samarinda."),
        AudioClip::new(
            4,
            "Bertanya arah ke tepian",
            "Bahasa Kutai",
            "0:39",
            CategoryId(2),
            "audio/clips/kutai_arah.mp3",
        )
        .with_speaker("Bapak Awang Darmawan, Samarinda"),
        AudioClip::new(
            5,
            "Bilangan satu sampai sepuluh",
            "Bahasa Dayak Kenyah",
            "0:31",
            CategoryId(3),
            "audio/clips/kenyah_bilangan.mp3",
        )
        .with_description("Hitungan 'ca, dua, telu' hingga sepuluh dengan pengulangan."),
        AudioClip::new(
            6,
            "Nama-nama anggota keluarga",
            "Bahasa Kutai",
            "0:44",
            CategoryId(3),
            "audio/clips/kutai_keluarga.mp3",
        ),
        AudioClip::new(
            7,
            "Kosakata sungai dan perahu",
            "Bahasa Banjar",
            "0:52",
            CategoryId(3),
            "audio/clips/banjar_sungai.mp3",
        )
        .with_speaker("Ibu Masniah, Samarinda Seberang"),
        AudioClip::new(
            8,
            "Lagu Indung-Indung",
            "Bahasa Melayu Kutai",
            "2:05",
            CategoryId(4),
            "audio/clips/indung_indung.mp3",
        )
        .with_description("Lagu daerah Kalimantan Timur bernapas pantun nasihat.")
        .with_speaker("Sanggar Tepian Mahakam"),
        AudioClip::new(
            9,
            "Lagu Buah Bolok",
            "Bahasa Kutai",
            "1:58",
            CategoryId(4),
            "audio/clips/buah_bolok.mp3",
        )
        .with_description("Lagu rakyat tentang buah bolok, diiringi gambus tingkilan.")
        .with_speaker("Sanggar Gubang, Tenggarong"),
        AudioClip::new(
            10,
            "Syair timang anak",
            "Bahasa Berau",
            "1:12",
            CategoryId(4),
            "audio/clips/berau_timang.mp3",
        )
        .with_speaker("Ibu Sitti Rahmah, Tanjung Redeb"),
    ]
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;

    #[test]
    fn builtin_catalog_is_valid() {
        Catalog::builtin().validate().expect("builtin catalog invariants");
    }

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert!(!catalog.regions.is_empty());
        assert!(!catalog.quizzes.is_empty());
        assert!(!catalog.coded_quizzes.is_empty());
        assert!(!catalog.stories.is_empty());
        assert!(!catalog.audio_categories.is_empty());
        assert!(!catalog.audio_clips.is_empty());
    }

    #[test]
    fn region_ids_are_unique() {
        let catalog = Catalog::builtin();
        for region in &catalog.regions {
            let count = catalog.regions.iter().filter(|r| r.id == region.id).count();
            assert_eq!(count, 1, "duplicate region id {}", region.id);
        }
    }

    #[test]
    fn every_story_has_paragraphs() {
        for story in &Catalog::builtin().stories {
            assert!(
                !story.paragraphs().is_empty(),
                "story '{}' has no paragraphs",
                story.title
            );
        }
    }

    #[test]
    fn pesut_legend_has_four_paragraphs() {
        let catalog = Catalog::builtin();
        let story = catalog
            .stories
            .iter()
            .find(|s| s.title == "Legenda Pesut Mahakam")
            .expect("pesut legend present");
        assert_eq!(story.paragraphs().len(), 4);
    }
}
