use crate::styles::{enums::style_category::StyleCategory, models::style::Style};

/// Which explanation template a category is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptTemplate {
    /// Movements defined by era and place rather than by a painter.
    Period,
    /// Movements where the backend picked a representative painter.
    Painter,
    /// A single master chosen directly by the user.
    Master,
}

impl PromptTemplate {
    pub fn for_category(category: StyleCategory) -> Option<Self> {
        match category {
            StyleCategory::Ancient | StyleCategory::ByzantineIslamic => Some(Self::Period),
            StyleCategory::Impressionism
            | StyleCategory::PostImpressionism
            | StyleCategory::Fauvism
            | StyleCategory::Expressionism
            | StyleCategory::Renaissance
            | StyleCategory::Baroque
            | StyleCategory::Rococo
            | StyleCategory::Romanticism => Some(Self::Painter),
            StyleCategory::Masters => Some(Self::Master),
            StyleCategory::Oriental | StyleCategory::Unknown => None,
        }
    }
}

/// Builds the text generation prompt for a style. An empty string means
/// there is nothing to generate.
pub fn build_prompt(style: &Style, ai_selected_artist: Option<&str>) -> String {
    match PromptTemplate::for_category(style.category) {
        Some(PromptTemplate::Period) => period_prompt(&style.name),
        Some(PromptTemplate::Painter) => {
            let artist = ai_selected_artist
                .filter(|artist| !artist.is_empty())
                .unwrap_or(style.name.as_str());
            painter_prompt(&style.name, artist)
        }
        Some(PromptTemplate::Master) => master_prompt(&style.name),
        None => String::new(),
    }
}

fn period_prompt(name: &str) -> String {
    format!(
        "당신은 미술사 전문가입니다.
사용자가 선택한 미술사조는 \"{name}\"입니다.

고대 미술과 비잔틴·이슬람 미술은 특정 화가가 아닌 시대와 양식으로 정의됩니다.

다음 형식으로 정확히 3-4문장으로 작성하세요:

1문장: \"당신의 사진에는 {name}의 {{대표 기법명과 특징}} 기법이 적용되었습니다.\"
2문장: \"{name}은 {{시대 범위}}의 {{문화권}} 미술로, {{핵심 특징과 추구한 가치를 상세히}} 설명.\"
3문장: \"대표 유물로는 {{유물1}}, {{유물2}}, {{유물3}} 등이 있으며, {{유물들의 공통 의미를 한 문장으로}}.\"
4문장(선택): \"{{현대에 미친 영향이나 당신 사진과의 연결을 한 문장으로}}\"

예시 (비잔틴·이슬람):
당신의 사진에는 비잔틴·이슬람 미술의 황금 모자이크와
기하학적 아라베스크 문양 기법이 적용되었습니다.

비잔틴·이슬람 미술은 AD 400-1400년의 동로마 제국과 이슬람 문화권 미술로,
황금빛으로 빛나는 모자이크와 무한히 반복되는 기하학 패턴을 통해
신성함과 영원함을 표현하는 것이 특징입니다.

대표 유물로는 하기아 소피아의 모자이크, 알함브라 궁전의 아라베스크,
바위의 돔의 황금 장식 등이 있으며, 이들은 모두 인간이 신성에 다가가려는
영적 열망을 담고 있습니다.

천년이 지난 지금도 그 황금빛이 바래지 않듯, 당신의 사진 역시
시간을 초월한 아름다움으로 빛나고 있습니다."
    )
}

fn painter_prompt(name: &str, artist: &str) -> String {
    format!(
        "당신은 미술사 전문가입니다.
사용자가 선택한 미술사조는 \"{name}\"이고,
당신이 선택한 화가는 \"{artist}\"입니다.

다음 형식으로 정확히 3-4문장으로 작성하세요:

1문장: \"당신의 사진에는 {{화가명}}의 {{대표 기법명}} 기법이 적용되었습니다.\"
2문장: \"{{화가명}}({{생몰연도}})은 {{국적}} 출신 {{화풍}} 화가로, {{핵심 특징 상세 설명}}이 특징입니다.\"
3문장: \"대표작으로는 \"{{작품1}}\", \"{{작품2}}\", \"{{작품3}}\" 등이 있으며, {{작품들의 공통점이나 화가의 예술 철학 한 줄}}.\"
4문장(선택): \"{{화가의 인상적인 일화나 영향, 또는 당신 사진과의 연결을 한 문장으로}}\"

예시:
당신의 사진에는 클로드 모네의 보색 대비와 색채 분할 기법이 적용되었습니다.

클로드 모네(1840-1926)는 프랑스 출신 인상주의의 창시자로,
같은 장소를 서로 다른 시간대에 반복해서 그리며 빛의 순간적 변화를
포착하는 것이 특징입니다.

대표작으로는 수련 연작 40여 점, 루앙 대성당 연작, \"인상, 해돋이\" 등이 있으며,
모두 빛과 시간의 흐름을 담아내려는 평생의 탐구를 보여줍니다.

시력을 잃어가면서도 \"빛과 색채 속에서 사라지고 싶다\"고 말했던 그의 열정이
당신의 사진에도 담겨 있습니다."
    )
}

fn master_prompt(name: &str) -> String {
    format!(
        "당신은 미술사 전문가입니다.
사용자가 선택한 거장은 \"{name}\"입니다.

다음 형식으로 정확히 3-4문장으로 작성하세요:

1문장: \"당신의 사진에는 {{화가명}}의 {{특정 시기나 스타일의}} {{구체적 기법명}} 기법이 적용되었습니다.\"
2문장: \"{{화가명}}({{생몰연도}})은 {{국적}} 출신 {{화풍}} 화가로, {{핵심 특징과 예술적 추구를 상세히}} 설명.\"
3문장: \"대표작으로는 \"{{작품1}}\", \"{{작품2}}\", \"{{작품3}}\" 등이 있으며, {{작품들의 특징을 한 문장으로}}.\"
4문장(선택): \"{{화가의 인상적인 일화나 당신 사진과의 연결을 한 문장으로}}\"

예시:
당신의 사진에는 빈센트 반 고흐의 아를 시대 임파스토와
소용돌이치는 붓터치 기법이 적용되었습니다.

빈센트 반 고흐(1853-1890)는 네덜란드 출신 후기인상주의 화가로,
물감을 두껍게 쌓아올리고 격렬한 붓질로 내면의 감정을
직접적으로 표현하는 것이 특징입니다.

대표작으로는 소용돌이치는 \"별이 빛나는 밤\", 타오르는 \"해바라기\" 연작,
불안한 \"까마귀가 나는 밀밭\" 등이 있으며, 모두 그의 뜨거운 감정이
붓끝을 통해 폭발하듯 쏟아져 나온 작품들입니다.

\"나는 별이 되고 싶다\"고 썼던 그의 꿈이 당신의 사진 속에서 빛나고 있습니다."
    )
}
