use super::aggregate::{HomeSection, HomeSectionKind};

fn section(
    id: i64,
    kind: HomeSectionKind,
    title: &str,
    subtitle: &str,
    order: i64,
    visible: bool,
) -> HomeSection {
    HomeSection {
        id,
        kind,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        order,
        visible,
    }
}

pub fn sample_home_sections() -> Vec<HomeSection> {
    use HomeSectionKind::*;
    vec![
        section(1, HeroBanner, "Siêu sale tháng 3", "Giảm đến 50% cho điện thoại", 1, true),
        section(2, FeaturedProducts, "Sản phẩm nổi bật", "Được mua nhiều nhất tuần", 2, true),
        section(3, CategoryShowcase, "Mua sắm theo danh mục", "", 3, true),
        section(4, LatestPosts, "Tin công nghệ", "Cập nhật mỗi ngày", 4, false),
        section(5, PromoBanner, "Trả góp 0%", "Áp dụng cho thẻ tín dụng", 5, true),
    ]
}
