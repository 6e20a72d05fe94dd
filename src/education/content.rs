//! Pre-written explanations for the oriental styles. These never go through
//! text generation.

const KOREAN: &str = "당신의 사진에는 조선 후기 민화의 굵은 먹선과 선명한 오방색 채색 기법이 적용되었습니다.

민화는 18-19세기 조선의 이름 없는 화가들이 서민의 소망을 담아 그린 그림으로, 정해진 격식보다 자유로운 구도와 해학적인 표현이 특징입니다.

대표적인 소재로는 까치와 호랑이, 책가도, 화조도, 십장생 등이 있으며, 모두 복을 부르고 액운을 막으려는 소박한 바람을 담고 있습니다.

집집마다 걸어 두고 새해를 맞이했던 민화처럼, 당신의 사진에도 따뜻한 기원이 깃들어 있습니다.";

const CHINESE_INK: &str = "당신의 사진에는 중국 수묵화의 먹의 농담과 여백을 살린 발묵·파묵 기법이 적용되었습니다.

수묵화는 당·송대에 완성되어 문인 화가들이 즐겨 그린 그림으로, 색을 배제하고 먹 하나로 대상의 형태보다 정신과 기운을 표현하는 것이 특징입니다.

대표작으로는 범관의 \"계산행려도\", 곽희의 \"조춘도\", 팔대산인의 화조화 등이 있으며, 모두 자연과 하나 되려는 동양의 사유를 담고 있습니다.

비워 둔 여백이 오히려 더 많은 이야기를 들려주듯, 당신의 사진도 고요한 울림을 품게 되었습니다.";

const CHINESE_GONGBI: &str = "당신의 사진에는 중국 공필화의 가는 윤곽선과 여러 번 덧칠한 섬세한 채색 기법이 적용되었습니다.

공필화는 송대 궁정 화원을 중심으로 발전한 세밀화로, 붓끝으로 한 올 한 올 선을 긋고 맑은 색을 층층이 쌓아 대상을 정밀하고 화려하게 묘사하는 것이 특징입니다.

대표작으로는 송 휘종의 \"서학도\", 장택단의 \"청명상하도\", 황전의 \"사생진금도\" 등이 있으며, 모두 사물을 끝까지 관찰하는 장인의 집념을 보여줍니다.

천 년 전 화원들의 정성 어린 붓끝이 당신의 사진 속에서 다시 살아났습니다.";

const JAPANESE: &str = "당신의 사진에는 일본 우키요에의 평면적인 색면과 뚜렷한 윤곽선 목판화 기법이 적용되었습니다.

우키요에는 17-19세기 에도 시대 서민 문화 속에서 꽃핀 목판화로, 화가·조각가·인쇄공이 협업해 대담한 구도와 선명한 색채로 일상의 풍경과 인물을 담아낸 것이 특징입니다.

대표작으로는 가쓰시카 호쿠사이의 \"가나가와 해변의 높은 파도\", 우타가와 히로시게의 \"도카이도 53역참\", 기타가와 우타마로의 미인화 등이 있으며, 모두 덧없는 세상의 아름다운 순간을 붙잡으려 했습니다.

유럽의 인상주의 화가들까지 매료시켰던 그 선과 색이 당신의 사진에 담겼습니다.";

const GONGBI_MARKERS: [&str; 2] = ["gongbi", "공필"];

/// Whether the artist label chosen by the backend points at the gongbi branch.
pub fn is_gongbi(ai_selected_artist: Option<&str>) -> bool {
    let artist = ai_selected_artist.unwrap_or_default().to_lowercase();

    GONGBI_MARKERS.iter().any(|marker| artist.contains(marker))
}

pub fn oriental_education(style_id: &str, ai_selected_artist: Option<&str>) -> Option<&'static str> {
    match style_id {
        "korean" => Some(KOREAN),
        "chinese" => match is_gongbi(ai_selected_artist) {
            true => Some(CHINESE_GONGBI),
            false => Some(CHINESE_INK),
        },
        "japanese" => Some(JAPANESE),
        _ => None,
    }
}
