// Built-in name tables.
//
// Every morpheme is a single precomposed Hangul syllable so an assembled name is always one
// family character plus one or two given characters. `GLOSS_ENTRIES` is an ordered override list:
// several characters are declared more than once and the later declaration wins (see
// `Glossary::from_entries`).

use crate::style::Style;
use crate::types::KeywordCategory;

pub(crate) const FAMILY_NAMES: &[&str] = &[
    "김", "이", "박", "최", "정", "강", "조", "윤", "장", "임", "한", "오", "서", "신", "권", "황", "안",
    "송", "전", "고",
];

/// Male and female halves of one style's morpheme table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StyleMorphemes {
    pub(crate) male: &'static [&'static str],
    pub(crate) female: &'static [&'static str],
}

const CUTE: StyleMorphemes = StyleMorphemes {
    male: &["봄", "별", "달", "꽃", "솔", "물", "결", "빛", "비", "눈"],
    female: &["희", "미", "예", "연", "주", "은", "금", "옥", "진", "란"],
};

const COOL: StyleMorphemes = StyleMorphemes {
    male: &["대", "태", "준", "호", "석", "철", "영", "수", "원", "진"],
    female: &["현", "지", "유", "경", "민", "정", "화", "원", "영", "혜"],
};

const ELEGANT: StyleMorphemes = StyleMorphemes {
    male: &["지", "혜", "선", "정", "의", "용", "성", "민", "현", "인"],
    female: &["숙", "자", "라", "리", "나", "다", "사", "아", "야", "윤"],
};

const FUNNY: StyleMorphemes = StyleMorphemes {
    male: &["동", "우", "찬", "빈", "범", "택", "근", "배", "식", "규"],
    female: &["솔", "별", "달", "슬", "늘", "온", "참", "샘", "림", "애"],
};

const TRADITIONAL: StyleMorphemes = StyleMorphemes {
    male: &["왕", "신", "사", "공", "후", "군", "상", "장", "조", "석"],
    female: &["백", "청", "홍", "금", "은", "황", "흑", "적", "록", "자"],
};

pub(crate) fn style_morphemes(style: Style) -> &'static StyleMorphemes {
    match style {
        Style::Cute => &CUTE,
        Style::Cool => &COOL,
        Style::Elegant => &ELEGANT,
        Style::Funny => &FUNNY,
        Style::Traditional => &TRADITIONAL,
    }
}

pub(crate) const KEYWORD_CATEGORIES: &[KeywordCategory] = &[
    KeywordCategory {
        name: "자연",
        keywords: &[
            "봄", "여름", "가을", "겨울", "해", "달", "별", "꽃", "나무", "물", "바다", "산", "강", "바람",
            "구름", "비", "눈",
        ],
    },
    KeywordCategory {
        name: "성격",
        keywords: &[
            "귀여운", "멋진", "예쁜", "강한", "똑똑한", "착한", "용감한", "친절한", "밝은", "따뜻한",
        ],
    },
    KeywordCategory {
        name: "색깔",
        keywords: &["빨간", "파란", "노란", "초록", "보라", "하얀", "검은", "금색", "은색"],
    },
    KeywordCategory {
        name: "감정",
        keywords: &["기쁜", "행복한", "사랑스러운", "평화로운", "희망적인", "즐거운"],
    },
    KeywordCategory {
        name: "직업",
        keywords: &["의사", "선생님", "화가", "음악가", "작가", "과학자", "운동선수"],
    },
    KeywordCategory {
        name: "동물",
        keywords: &["호랑이", "사자", "독수리", "돌고래", "나비", "토끼", "강아지", "고양이"],
    },
];

pub(crate) const KEYWORD_INDEX: &[(&str, &[&str])] = &[
    // nature
    ("봄", &["봄", "춘", "희", "연"]),
    ("여름", &["하", "열", "온", "태"]),
    ("가을", &["추", "결", "풍", "국"]),
    ("겨울", &["동", "설", "눈", "순"]),
    ("해", &["해", "태", "희", "환"]),
    ("달", &["달", "월", "은", "윤"]),
    ("별", &["별", "성", "빛", "진"]),
    ("꽃", &["꽃", "화", "연", "란", "매"]),
    ("나무", &["솔", "림", "근", "송"]),
    ("물", &["물", "수", "윤", "샘"]),
    ("바다", &["해", "호", "원", "수"]),
    ("산", &["산", "석", "준", "태"]),
    ("강", &["강", "하", "원", "류"]),
    ("바람", &["결", "풍", "유", "솔"]),
    ("구름", &["운", "유", "빛", "온"]),
    ("비", &["비", "우", "은", "혜"]),
    ("눈", &["눈", "설", "백", "순"]),
    // character
    ("귀여운", &["아", "예", "솔", "봄", "별"]),
    ("멋진", &["준", "태", "호", "현"]),
    ("예쁜", &["미", "예", "아", "연", "화"]),
    ("강한", &["강", "철", "석", "건", "태"]),
    ("똑똑한", &["지", "현", "민", "슬", "혜"]),
    ("착한", &["선", "인", "순", "은"]),
    ("용감한", &["용", "범", "호", "강"]),
    ("친절한", &["인", "온", "혜", "은"]),
    ("밝은", &["환", "희", "빛", "명", "해"]),
    ("따뜻한", &["온", "난", "화", "윤"]),
    // colour
    ("빨간", &["홍", "적", "주", "단"]),
    ("파란", &["청", "람", "하"]),
    ("노란", &["황", "금"]),
    ("초록", &["록", "송", "솔"]),
    ("보라", &["자", "란"]),
    ("하얀", &["백", "설", "순"]),
    ("검은", &["흑", "현"]),
    ("금색", &["금", "황"]),
    ("은색", &["은", "백"]),
    // feeling
    ("기쁜", &["희", "환", "기"]),
    ("행복한", &["행", "복", "희", "애"]),
    ("사랑스러운", &["애", "사", "아", "미"]),
    ("평화로운", &["평", "화", "안", "온"]),
    ("희망적인", &["희", "소", "빛"]),
    ("즐거운", &["락", "환", "희"]),
    // occupation
    ("의사", &["의", "인", "혜"]),
    ("선생님", &["훈", "사", "지"]),
    ("화가", &["화", "채", "예"]),
    ("음악가", &["음", "율", "가", "리"]),
    ("작가", &["문", "서", "작"]),
    ("과학자", &["지", "현", "학"]),
    ("운동선수", &["건", "강", "민", "준"]),
    // animal
    ("호랑이", &["범", "호", "인"]),
    ("사자", &["사", "왕", "용"]),
    ("독수리", &["수", "응", "비"]),
    ("돌고래", &["해", "돌", "래"]),
    ("나비", &["나", "비", "화"]),
    ("토끼", &["토", "월", "아"]),
    ("강아지", &["동", "복", "아"]),
    ("고양이", &["묘", "야", "옹"]),
];

pub(crate) const GLOSS_ENTRIES: &[(&str, &str)] = &[
    // nature
    ("봄", "생명력, 희망, 새로운 시작"),
    ("해", "밝음, 희망, 빛"),
    ("달", "아름다움, 신비, 평온"),
    ("별", "소원, 꿈, 빛남"),
    ("꽃", "아름다움, 사랑, 순수"),
    ("물", "순수함, 유연함, 생명"),
    ("산", "의지, 굳건함, 높은 뜻"),
    ("강", "흐름, 지속성, 역동성"),
    ("비", "은혜, 축복, 새로움"),
    ("눈", "순결, 깨끗함, 아름다움"),
    // virtues
    ("지", "지혜, 총명함, 슬기로움"),
    ("혜", "은혜, 자비로움, 지혜"),
    ("선", "선함, 착함, 올바름"),
    ("정", "정직, 바름, 올곧음"),
    ("의", "의로움, 정의, 올바름"),
    ("용", "용기, 용맹함, 드래곤"),
    ("성", "성실함, 진실함, 별"),
    ("민", "민첩함, 영민함, 백성"),
    ("현", "현명함, 지혜로움, 어질다"),
    ("인", "어질다, 사람다움, 인자함"),
    ("효", "효도, 부모님 사랑"),
    ("충", "충성심, 진실함"),
    ("예", "예의, 공손함, 아름다움"),
    ("신", "믿음, 신뢰, 신실함"),
    ("겸", "겸손함, 겸양"),
    ("관", "관찰력, 넓은 시야"),
    ("경", "공경, 존경, 조심"),
    ("순", "순수함, 순진함, 따름"),
    ("온", "온화함, 따뜻함"),
    ("화", "화목, 평화, 꽃"),
    ("평", "평화, 평온함"),
    ("안", "평안함, 안전함"),
    // common in boys' names
    ("대", "큰, 위대한, 크다"),
    ("태", "큰, 태양, 위대한"),
    ("준", "높은, 준수한, 기준"),
    ("호", "큰, 넓은, 호수"),
    ("석", "바위, 견고함, 돌"),
    ("철", "쇠, 의지, 견고함"),
    ("영", "영원함, 빛남, 영광"),
    ("수", "물, 맑음, 오래삶, 뛰어남"),
    ("원", "원만함, 둥글음, 근원"),
    ("진", "진실, 참된, 나아감"),
    ("건", "건강, 튼튼함, 세움"),
    ("강", "강함, 굳셈, 강물"),
    ("혁", "변화, 개혁, 가죽"),
    ("훈", "가르침, 훈련, 공훈"),
    ("환", "환한, 밝은, 즐거운"),
    ("완", "완전함, 마무리"),
    ("창", "창조, 창문, 창"),
    ("섭", "잡다, 대신하다, 섭정"),
    ("규", "규칙, 법도, 둥근"),
    ("식", "먹다, 심다, 알다"),
    ("근", "뿌리, 근본, 근면"),
    ("배", "배우다, 베풀다, 배"),
    ("동", "움직임, 동쪽, 어린이"),
    ("우", "비, 오른쪽, 도움"),
    ("찬", "칭찬, 찬양, 차가운"),
    ("빈", "빈틈없는, 손님"),
    ("범", "범위, 호랑이, 법"),
    ("택", "선택, 택하다"),
    // common in girls' names
    ("희", "희망, 기쁨, 밝음"),
    ("미", "아름다움, 미소"),
    ("예", "예쁨, 우아함, 예술"),
    ("연", "연꽃, 이어짐, 부드러움"),
    ("주", "구슬, 붉은색, 주인"),
    ("은", "은색, 고귀함, 은혜"),
    ("금", "금, 귀함, 소중함"),
    ("옥", "옥, 보석, 아름다움"),
    ("진", "진주, 진실, 귀함"),
    ("란", "난초, 우아함"),
    ("매", "매화, 아름다움"),
    ("국", "나라, 국화"),
    ("영", "꽃잎, 영원, 영특함"),
    ("숙", "숙녀, 어른스러움"),
    ("자", "자녀, 사랑, 자다"),
    ("라", "나팔, 소라"),
    ("리", "리듬, 이치"),
    ("나", "나, 자신"),
    ("다", "많다, 다양함"),
    ("사", "넷, 사랑"),
    ("아", "아름다움, 아기"),
    ("야", "밤, 들"),
    ("윤", "윤기, 윤택함"),
    ("서", "서쪽, 시원함, 책"),
    ("하", "하늘, 아래, 큰"),
    ("혜", "지혜, 은혜"),
    ("지", "지혜, 의지"),
    ("유", "흐름, 있음, 놀다"),
    ("경", "경치, 경험, 공경"),
    ("민", "민첩, 백성"),
    ("정", "정성, 바름"),
    ("화", "꽃, 화목"),
    ("원", "원만, 소원"),
    ("현", "현명함, 현실"),
    ("영", "영원, 영광"),
    ("혜", "은혜, 지혜"),
    ("진", "진실, 진주"),
    ("선", "선함, 착함"),
    ("미", "아름다움, 미소"),
    ("수", "물, 뛰어남"),
    ("은", "은혜, 은색"),
    ("애", "사랑, 애정"),
    ("림", "숲, 나무들"),
    ("빈", "빈틈없는, 완전한"),
    ("솔", "소나무, 솔직함"),
    ("별", "별, 특별함"),
    ("달", "달, 다다름"),
    ("슬", "슬기, 지혜"),
    ("늘", "항상, 늘"),
    ("온", "온전함, 따뜻함"),
    ("참", "참, 진실"),
    ("샘", "샘물, 근원"),
    ("봄", "봄, 생명력"),
    // colours
    ("백", "하얀색, 순수함"),
    ("청", "파란색, 맑음"),
    ("홍", "빨간색, 열정"),
    ("금", "황금색, 귀함"),
    ("은", "은색, 고귀함"),
    ("황", "황금, 노란색"),
    ("흑", "검은색, 깊이"),
    ("적", "빨간색, 열정"),
    ("록", "녹색, 자연"),
    ("자", "자주색, 고귀함"),
    // rank and station
    ("왕", "임금, 왕"),
    ("신", "신하, 믿음"),
    ("사", "선비, 사람"),
    ("공", "공적, 공평함"),
    ("후", "뒤, 후손"),
    ("군", "군자, 임금"),
    ("상", "위, 높음"),
    ("장", "기다림, 어른"),
    // time
    ("조", "아침, 이른"),
    ("석", "저녁, 바위"),
    ("야", "밤, 들판"),
    ("춘", "봄"),
    ("하", "여름"),
    ("추", "가을"),
    ("동", "겨울"),
    // direction
    ("동", "동쪽"),
    ("서", "서쪽"),
    ("남", "남쪽"),
    ("북", "북쪽"),
    ("중", "가운데"),
    // keyword-index syllables
    ("결", "물결, 바람결, 고움"),
    ("빛", "빛, 밝음, 희망"),
    ("열", "열정, 뜨거움"),
    ("풍", "바람, 풍요로움"),
    ("설", "눈, 깨끗함"),
    ("월", "달, 은은함"),
    ("송", "소나무, 푸르름"),
    ("류", "흐름, 물줄기"),
    ("운", "구름, 행운"),
    ("명", "밝음, 총명함"),
    ("난", "따뜻함, 난초"),
    ("단", "붉음, 정성"),
    ("람", "쪽빛, 푸름"),
    ("기", "기쁨, 기운"),
    ("행", "행복, 다행"),
    ("복", "복, 행운"),
    ("소", "바람, 소망"),
    ("락", "즐거움, 기쁨"),
    ("채", "빛깔, 채색"),
    ("음", "소리, 음악"),
    ("율", "가락, 음률"),
    ("가", "노래, 아름다움"),
    ("문", "글, 학문"),
    ("작", "지음, 창작"),
    ("학", "배움, 학문"),
    ("응", "매, 응답"),
    ("돌", "돌, 단단함"),
    ("래", "미래, 다가옴"),
    ("토", "흙, 토끼"),
    ("묘", "고양이, 신묘함"),
    ("옹", "옹골참, 너그러움"),
];
