//! Built-in product table. Lists are in display priority order.

#[derive(Debug, Clone, Copy)]
pub(crate) struct ProductSeed {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SkinTypeSeed {
    pub skin_type: &'static str,
    pub products: &'static [ProductSeed],
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CategorySeed {
    pub category: &'static str,
    pub lists: &'static [SkinTypeSeed],
}

const fn product(label: &'static str, url: &'static str) -> ProductSeed {
    ProductSeed { label, url }
}

pub(crate) const CATALOG_SEEDS: &[CategorySeed] = &[
    CategorySeed {
        category: "toner",
        lists: &[
            SkinTypeSeed {
                skin_type: "oily",
                products: &[
                    product(
                        "Good Vibes Green Tea Toner 200 ml",
                        "https://www.goodvibesonly.in/products/toner-green-tea-200-ml-1",
                    ),
                    product(
                        "Plum CeraSense Milky Toner with Açaí",
                        "https://plumgoodness.com/products/plum-cerasense-milky-toner-with-acai-1-nmf",
                    ),
                    product(
                        "Hyphen Hydrating Ceramide Toner Essence",
                        "https://letshyphen.com/products/hydrating-ceramide-toner-essence",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "dry",
                products: &[
                    product(
                        "Hyphen Hydrating Ceramide Toner Essence",
                        "https://letshyphen.com/products/hydrating-ceramide-toner-essence",
                    ),
                    product(
                        "Aqualogica Hydrate & Refresh Toning Mist",
                        "https://aqualogica.in/products/hydrate-refresh-toning-mist-100-ml?variant=44268094193889&country=IN&currency=INR",
                    ),
                    product(
                        "Cetaphil Cica Balancing Toner 150ml",
                        "https://www.cetaphil.in/products/product-categories/cetaphil-soothing-and-comforting-cica-balancing-toner---150ml/3499320017305.html",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "sensitive",
                products: &[
                    product(
                        "Minimalist Soothing Toner (gentle)",
                        "https://beminimalist.co/products/hocl-skin-relief-spray-150-ppm",
                    ),
                    product(
                        "Wonder Milky Mochi Toner",
                        "https://tonymoly.us/products/wonder-ceramide-mochi-toner-1",
                    ),
                    product(
                        "Cetaphil Soothing and Comforting CICA Balancing Toner",
                        "https://www.cetaphil.in/products/product-categories/cetaphil-soothing-and-comforting-cica-balancing-toner---150ml/3499320017305.html",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "combination",
                products: &[
                    product(
                        "Plum CeraSense Milky Toner with Açaí",
                        "https://plumgoodness.com/products/plum-cerasense-milky-toner-with-acai-1-nmf",
                    ),
                    product(
                        "Hyphen Ceramide Toner",
                        "https://letshyphen.com/products/hydrating-ceramide-toner-essence",
                    ),
                    product(
                        "Aqualogica Toning Mist",
                        "https://aqualogica.in/products/hydrate-refresh-toning-mist-100-ml",
                    ),
                ],
            },
        ],
    },
    CategorySeed {
        category: "cleanser",
        lists: &[
            SkinTypeSeed {
                skin_type: "general",
                products: &[
                    product(
                        "Cetaphil Gentle Skin Cleanser",
                        "https://www.cetaphil.in/products/cleansers/gentle-skin-cleanser/8906005274105.html",
                    ),
                    product(
                        "CeraVe Balancing Air Foam Facial Cleanser",
                        "https://www.cerave.com/skincare/cleansers/air-foam-foaming-facial-cleanser",
                    ),
                    product(
                        "The Derma Co. Salicylic Cleanser",
                        "https://thedermaco.com/product/sali-cinamide-anti-acne-face-wash-with-2-salicylic-acid-2-niacinamide-100ml",
                    ),
                    product(
                        "Minimalist 2% Salicylic Acid Cleanser",
                        "https://beminimalist.co/products/salicylic-lha-2-cleanser",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "oily",
                products: &[
                    product(
                        "Cetaphil Pro Oil Control Foam wash",
                        "https://www.cetaphil.in/products/cleansers/cetaphil-pro-oil-control-foam-wash/3499320011877.html",
                    ),
                    product(
                        "Cerave Acne Control Cleanser",
                        "https://www.cerave.com/skincare/cleansers/acne-salicylic-acid-cleanser",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "dry",
                products: &[
                    product(
                        "Cetaphil Gentle Skin Cleanser",
                        "https://www.cetaphil.in/products/gentle-skin-cleanser",
                    ),
                    product(
                        "Minimalist 2% Salicylic Acid Cleanser",
                        "https://beminimalist.co/products/salicylic-lha-2-cleanser",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "sensitive",
                products: &[
                    product(
                        "Cetaphil Gentle Skin Cleanser",
                        "https://www.cetaphil.in/products/gentle-skin-cleanser",
                    ),
                    product(
                        "Cerave Hydrating Facial Cleanser",
                        "https://www.cerave.com/skincare/cleansers/hydrating-facial-cleanser",
                    ),
                ],
            },
        ],
    },
    CategorySeed {
        category: "serum",
        lists: &[
            SkinTypeSeed {
                skin_type: "general",
                products: &[
                    product(
                        "Minimalist 10% Vitamin C Serum",
                        "https://beminimalist.co/collections/best-sellers/products/vitamin-c-ethyl-ascorbic-acid-10-acetyl-glucosamine-1",
                    ),
                    product(
                        "Hyphen Double shot face serum",
                        "https://letshyphen.com/products/double-shot-radiance-lift-serum",
                    ),
                    product(
                        "10% Vitamin C Face Serum with 5% Niacinamide & Hyaluronic Acid",
                        "https://thedermaco.com/product/10-vitamin-c-face-serum-with-niacinamide-hyaluronic-acid-for-skin-radiance-30ml",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "acne",
                products: &[
                    product(
                        "Minimalist Niacinamide Serum",
                        "https://beminimalist.co/products/niacinamide-10-with-matmarine",
                    ),
                    product(
                        "The Derma Co. Niacinamide Serum",
                        "https://thedermaco.com/product/10-percent-niacinamide-serum",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "reduce pigmentation",
                products: &[
                    product(
                        "2% Kojic Acid Face Serum with 1% Alpha Arbutin & Niacinamide",
                        "https://thedermaco.com/product/2-kojic-acid-face-serum-with-1-alpha-arbutin-niacinamide-30-ml",
                    ),
                    product(
                        "Hyphen Golden Hour Glow serum",
                        "https://letshyphen.com/products/golden-hour-glow-face-serum",
                    ),
                ],
            },
        ],
    },
    CategorySeed {
        category: "eyecream",
        lists: &[SkinTypeSeed {
            skin_type: "general",
            products: &[
                product(
                    "Coffee Under Eye Cream",
                    "https://www.mcaffeine.com/products/coffee-under-eye-cream-1",
                ),
                product(
                    "Snail Peptide 96 Under Eye Repair Cream with Snail Mucin & Peptide Complex",
                    "https://thedermaco.com/product/snail-peptide-96-under-eye-repair-cream-with-snail-mucin-peptide-complex-for-dark-circles-puffiness-15-g",
                ),
            ],
        }],
    },
    CategorySeed {
        category: "moisturizer",
        lists: &[
            SkinTypeSeed {
                skin_type: "dry",
                products: &[
                    product(
                        "Neutrogena Hydro Boost Hyaluronic Acid Water Gel",
                        "https://www.neutrogena.in/face/moisturizers/hydro-boost-hyaluronic-acid-water-gel",
                    ),
                    product("Cetaphil Moisturizing Cream", "https://www.cetaphil.in/products"),
                    product(
                        "Marula Oil 5% Face Moisturizer",
                        "https://beminimalist.co/products/marula-05-moisturizer",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "oily",
                products: &[
                    product(
                        "Cica + Niacinamide Oil Free Moisturizer",
                        "https://www.dotandkey.com/products/cica-5-niacinamide-oil-free-moisturizer-for-dark-spots-acne-fragrance-free-oily-sensitive-acne-prone-skin",
                    ),
                    product(
                        "Vitamin B5 10% Moisturizer",
                        "https://beminimalist.co/products/vitamin-b5-10-moisturizer",
                    ),
                    product(
                        "2% Cica Exosomes Oil-free Moisturizer",
                        "https://letshyphen.com/products/oil-free-moisturizer",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "sensitive",
                products: &[
                    product(
                        "Lakmē Absolute Perfect Radiance Skin Brightening Light Creme 50 g",
                        "https://www.lakmeindia.com/products/lakme-absolute-perfect-radiance-skin-brightening-light-creme-50g",
                    ),
                    product(
                        "Cetaphil Moisturizing Cream",
                        "https://www.cetaphil.in/moisturizers/moisturising-cream/8906005273436.html",
                    ),
                ],
            },
        ],
    },
    CategorySeed {
        category: "sunscreen",
        lists: &[
            SkinTypeSeed {
                skin_type: "dry",
                products: &[
                    product(
                        "Minimalist SPF 50 Sunscreen",
                        "https://beminimalist.co/products/multi-vitamin-spf-50",
                    ),
                    product(
                        "Cetaphil SPF 50+ Sunscreen",
                        "https://www.cetaphil.in/sunscreens/cetaphil-spf-50%2B-sunscreen/3499320013192.html",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "oily",
                products: &[
                    product(
                        "Hyphen Sun milk 100% mineral sunscreen spf 50 pa++++",
                        "https://letshyphen.com/products/sun-milk-100-mineral-sunscreen-spf-50-pa",
                    ),
                    product(
                        "Watermelon Sunscreen, SPF 50+ PA++++",
                        "https://www.dotandkey.com/products/watermelon-cooling-spf-50-face-sunscreen",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "sensitive",
                products: &[
                    product(
                        "Oats & Ceramide Sunscreen for Sensitive Skin - SPF 50+ PA ++++",
                        "https://www.drsheths.com/products/oats-ceramide-sensitive-skin-sunscreen-50g",
                    ),
                    product(
                        "Barrier Repair Hydrating Sunscreen SPF 50+ PA++++",
                        "https://www.dotandkey.com/products/barrier-repair-sunscreen",
                    ),
                ],
            },
            SkinTypeSeed {
                skin_type: "combination",
                products: &[product(
                    "Niacinamide Oil Balance Fluid Sunscreen | SPF50 PA++++",
                    "https://www.mywishcare.com/products/niacinamide-oil-balance-fluid-spf-50-sunscreen",
                )],
            },
        ],
    },
    CategorySeed {
        category: "scrub",
        lists: &[SkinTypeSeed {
            skin_type: "general",
            products: &[
                product(
                    "Coffee Face Scrub with Walnut",
                    "https://www.mcaffeine.com/products/naked-raw-coffee-face-scrub-with-vitamin-e",
                ),
                product(
                    "Volcanic Lava Ash Face Scrub with Yugdugu & White Lotus",
                    "https://discoverpilgrim.com/products/volcanic-lava-ash-face-scrub-with-yugdugu-white-lotus",
                ),
            ],
        }],
    },
    CategorySeed {
        category: "facemask",
        lists: &[SkinTypeSeed {
            skin_type: "general",
            products: &[
                product("Skin Radiance De-Tan Mask", "https://foxtale.in/products/skin-radiance-mask"),
                product(
                    "Vitamin C Pink Clay Mask",
                    "https://www.dotandkey.com/products/vitamin-c-pink-clay-mask",
                ),
                product(
                    "Super Glow Flash Facial 25% AHA+BHA+PHA Face Mask",
                    "https://www.mcaffeine.com/products/super-glow-flash-facial-25-aha-bha-pha-face-mask-50gm",
                ),
            ],
        }],
    },
];
