//! Compiled-in catalog data.

use super::{Release, Series};

pub(super) fn series() -> Vec<Series> {
    vec![
        make_series(
            "fruit",
            "Fruit Series",
            "水果系列",
            "4CAF50",
            "A delightful collection of fruit-themed Toy figures, each representing a different fruit with unique accessories and vibrant colors.",
            vec![
                Release::new("lemon", "Lemon", "柠檬", "F9E79F", "Lemon-themed Toy with yellow bathtub and rubber duck"),
                Release::new("banana", "Banana", "香蕉", "F7DC6F", "Banana-themed Toy with striped hat and yellow scarf"),
                Release::new("pineapple", "Pineapple", "凤梨", "F4D03F", "Pineapple-themed Toy with tropical accessories"),
                Release::new("orange", "Orange", "甜橙", "F8C471", "Orange-themed Toy with cowboy hat and orange"),
                Release::new("coconut", "Coconut", "椰子", "85C1E9", "Coconut-themed Toy with palm tree and tropical vibes"),
                Release::new("grape", "Grape", "葡萄", "BB8FCE", "Grape-themed Toy with purple grapes and vintage style"),
                Release::new("pear", "Pear", "梨", "A9DFBF", "Pear-themed Toy with green accessories and playful pose"),
                Release::new("strawberry", "Strawberry", "草莓", "F1948A", "Strawberry-themed Toy with pink hat and strawberry"),
                Release::new("cherry", "Cherry", "樱桃", "EC7063", "Cherry-themed Toy with red cherries and cute styling"),
                Release::new("kiwi", "Kiwi", "奇异果", "A3E4D7", "Kiwi-themed Toy with striped outfit and bowl"),
                Release::new("watermelon", "Watermelon", "西瓜", "58D68D", "Watermelon-themed Toy with red headband and watermelon"),
                Release::new("peach", "Peach", "水蜜桃", "F8D7DA", "Peach-themed Toy with soft pink colors and peach"),
            ],
        ),
        make_series(
            "big_energy",
            "Big Energy Series",
            "前方高能系列",
            "FF6B9D",
            "Vibrant fluffy keychain Toy collection representing different emotions and energies. One random item per blind box with colorful ring attachments.",
            vec![
                Release::new("love", "Love", "爱情", "FF69B4", "Pink fluffy Toy keychain representing love and affection"),
                Release::new("happiness", "Happiness", "快乐", "FFB347", "Orange fluffy Toy keychain symbolizing joy and happiness"),
                Release::new("loyalty", "Loyalty", "忠诚", "FFD700", "Yellow and pink fluffy Toy keychain representing loyalty"),
                Release::new("serenity", "Serenity", "宁静", "98FB98", "Green fluffy Toy keychain embodying peace and serenity"),
                Release::new("hope", "Hope", "希望", "87CEEB", "Blue fluffy Toy keychain inspiring hope and dreams"),
                Release::new("luck", "Luck", "幸运", "DDA0DD", "Purple fluffy Toy keychain bringing good luck and fortune"),
            ],
        ),
        make_series(
            "coca_cola",
            "Coca-Cola Series",
            "可口可乐系列",
            "DC143C",
            "Limited winter collaboration with Coca-Cola featuring fluffy white Toy figures with festive accessories and classic Coke products. One random item per blind box.",
            vec![
                Release::new("surprise_shake", "Surprise Shake", "惊喜摇摇", "DC143C", "White fluffy Toy with red Santa hat holding a classic Coca-Cola bottle"),
                Release::new("happy_factor", "Happy Factor", "快乐因子", "DC143C", "White fluffy Toy with winter accessories holding a red Coca-Cola cup"),
            ],
        ),
        make_series(
            "finding_mokoko",
            "Finding Mokoko Series",
            "全款展示",
            "FFB6C1",
            "Adventure-themed collection featuring Mokoko in various discovery scenarios. Each figure tells a story of exploration and wonder with unique accessories and poses.",
            vec![
                Release::new("seen_her", "Seen Her", "花间迷藏", "FFB6C1", "Mokoko hiding among flowers with a playful pose"),
                Release::new("follow_light", "Follow the Light", "追光而遇", "FFEAA7", "Mokoko with glowing light accessories in a dreamy setting"),
                Release::new("painters_help", "Painter's Help", "画的倦么", "74B9FF", "Mokoko assisting with painting, covered in colorful paint"),
                Release::new("over_there", "Over There!", "快看那里!", "81ECEC", "Mokoko pointing excitedly with blue accessories"),
                Release::new("see_you", "See You", "再见气球", "A29BFE", "Mokoko with balloons in a farewell scene"),
                Release::new("great_discovery", "Great Discovery", "重大发现", "00B894", "Mokoko making an exciting discovery with green elements"),
                Release::new("move_bravely", "Move Bravely", "勇敢向前", "E17055", "Brave Mokoko in warrior outfit ready for adventure"),
                Release::new("careless_hunter", "Careless Hunter", "粗心猎手", "FDCB6E", "Mokoko as a hunter with camping gear and accessories"),
                Release::new("winds_guidance", "Wind's Guidance", "风的指引", "636E72", "Mokoko following the wind's direction with flowing elements"),
                Release::new("found_it", "Found It!", "找到了!", "00B894", "Mokoko celebrating a successful discovery with green theme"),
                Release::new("heart_maze", "Heart Maze", "心的迷宫", "FD79A8", "Mokoko navigating through a heart-shaped maze with pink theme"),
            ],
        ),
        make_series(
            "lazy_yoga",
            "Lazy Yoga Series",
            "慵懒瑜伽系列",
            "DDA0DD",
            "Relaxing yoga-themed collection featuring Toy in various exercise and meditation poses. Each figure represents different yoga positions and wellness activities.",
            vec![
                Release::new("little_bird", "Little Bird", "小鸟式", "9B59B6", "Toy in bird pose with purple hoodie and star crown"),
                Release::new("zone_out", "Zone Out", "放空式", "A8E6CF", "Toy in meditation pose with green hood and peaceful expression"),
                Release::new("ab_roller", "Ab Roller", "杂技式", "FFB3BA", "Toy doing ab exercises with pink coloring and determined look"),
                Release::new("sweating", "Sweating", "暴汗式", "DDA0DD", "Toy in intense workout pose with purple hood showing effort"),
                Release::new("confident", "Confident", "自信式", "F8BBD9", "Toy in confident pose with pink coloring and self-assured stance"),
                Release::new("stretch_out", "Stretch Out", "拉伸式", "BFEFFF", "Toy doing stretching exercises with light blue outfit and yellow accessory"),
                Release::new("cozy_time", "Cozy Time", "慵懒式", "98FB98", "Toy in relaxed pose with green and white outfit looking comfortable"),
                Release::new("sleepy_mode", "Sleepy Mode", "困倦式", "696969", "Toy in sleepy pose with dark gray coloring and coffee cup"),
                Release::new("happy_stretch", "Happy Stretch", "开心式", "87CEEB", "Toy in joyful stretching pose with light blue outfit and cheerful expression"),
            ],
        ),
        make_series(
            "almost_hidden",
            "Almost Hidden Series",
            "几乎隐藏系列",
            "708090",
            "Creative camouflage collection featuring Toy cleverly disguised as everyday objects. Each figure showcases masterful hide-and-seek skills in plain sight.",
            vec![
                Release::new("canned_pineapple", "Canned Pineapple", "超罐菠萝云", "FFA500", "Toy disguised as a canned pineapple with fruit topping"),
                Release::new("lamp", "Lamp", "暗中观察", "40E0D0", "Toy hiding inside a turquoise table lamp"),
                Release::new("sculpture", "Sculpture", "广场焦点", "A9A9A9", "Toy camouflaged as a stone sculpture statue"),
                Release::new("fire_hydrant", "Fire Hydrant", "补水神器", "DC143C", "Toy disguised as a red fire hydrant with winter accessories"),
                Release::new("tree_house", "Tree House", "怪诞树屋", "8B4513", "Toy hiding in a mysterious tree house structure"),
                Release::new("flask", "Flask", "奇妙实验", "00CED1", "Toy concealed inside a scientific laboratory flask"),
                Release::new("traffic_light", "Traffic Light", "嘀嘀暗号", "2F4F4F", "Toy disguised as a traffic light with red and green signals"),
                Release::new("flower_pot", "Flower Pot", "隐身阳台", "8FBC8F", "Toy camouflaged as a flower pot with cactus plants"),
                Release::new("spray_can", "Spray Can", "艺术猜想", "FF1493", "Toy hidden inside a pink graffiti spray can"),
                Release::new("bread_bag", "Bread Bag", "怪味吐司", "D2B48C", "Toy disguised as a loaf of bread in packaging"),
                Release::new("mailbox", "Mailbox", "神秘信件", "4169E1", "Toy hiding inside a blue mailbox with mail slot"),
                Release::new("cactus", "Cactus", "无人区域", "32CD32", "Toy camouflaged as a green cactus plant"),
                Release::new("kiddie_ride", "Kiddie Ride", "偷偷开心", "B22222", "Toy hiding in a coin-operated kiddie ride machine"),
            ],
        ),
        make_series(
            "exciting_macaron",
            "Exciting Macaron Series",
            "美味马卡龙系列",
            "FFB6C1",
            "Sweet fluffy keychain collection inspired by delicious macaron flavors. Each vinyl face blind box figure features soft textures and dessert-themed colors with golden keychains.",
            vec![
                Release::new("soymilk", "Soymilk", "豆浆", "F5E6D3", "Creamy beige fluffy Toy keychain inspired by soymilk macaron flavor"),
                Release::new("lychee_berry", "Lychee Berry", "荔枝莓", "FFB6C1", "Sweet pink fluffy Toy keychain with lychee berry macaron theme"),
                Release::new("green_grape", "Green Grape", "青葡萄", "98FB98", "Fresh green fluffy Toy keychain inspired by green grape macaron"),
                Release::new("sea_salt_coconut", "Sea Salt Coconut", "海盐椰子", "87CEEB", "Ocean blue fluffy Toy keychain with sea salt coconut macaron flavor"),
                Release::new("toffee", "Toffee", "太妃糖", "DEB887", "Rich brown fluffy Toy keychain inspired by toffee macaron sweetness"),
                Release::new("sesame_bean", "Sesame Bean", "芝麻豆", "D3D3D3", "Elegant gray fluffy Toy keychain with sesame bean macaron theme"),
            ],
        ),
        make_series(
            "kow_yokoyama_mak",
            "Toy x Kow Yokoyama Ma.K. Series",
            "横山宏Ma.K系列",
            "2F4F4F",
            "Innovative collaboration blending Toy's playful charm with retro-futuristic mechanical designs inspired by the legendary Maschinen Krieger series. Each figure features detailed armor and tactical gear.",
            vec![],
        ),
        make_series(
            "wacky_mart",
            "Wacky Mart Series",
            "疯狂市场系列",
            "FF8C00",
            "Quirky convenience store themed collection featuring Toy disguised as popular snacks and food items. A pop-up exclusive series with unique packaging designs inspired by everyday grocery products.",
            vec![
                Release::new("grilled_sausage", "Grilled Sausage", "烤香肠", "FF6347", "Toy with green hat holding a grilled sausage with cute carrot companion"),
                Release::new("cup_noodles", "Cup Noodles", "杯面", "FFE4B5", "Toy peeking out of an instant ramen cup with red and white packaging"),
                Release::new("milk", "Milk", "牛奶", "F5F5F5", "Toy in black and white cow pattern milk carton packaging"),
                Release::new("chips", "Chips", "薯片", "DEB887", "Toy emerging from a chip bag with orange and purple snack packaging"),
                Release::new("corn", "Corn", "玉米", "FFD700", "Toy transformed into golden corn with green husk wrapping"),
                Release::new("fried_shrimp", "Fried Shrimp", "炸虾", "FFA500", "Toy in crispy golden fried shrimp coating with fluffy texture"),
                Release::new("canned_sardines", "Canned Sardines", "沙丁鱼罐头", "C0C0C0", "Toy packed in silver sardine can with pull-tab lid"),
                Release::new("sandwich", "Sandwich", "三明治", "90EE90", "Toy as a layered sandwich with green wrapping and colorful fillings"),
                Release::new("salad", "Salad", "沙拉", "98FB98", "Toy in fresh salad container with healthy green vegetables"),
                Release::new("yakitori", "Yakitori", "烤鸡串", "D2691E", "Multiple Toy figures on yakitori skewers in traditional packaging"),
                Release::new("chow_mein", "Chow Mein", "炒面", "F4A460", "Toy with instant noodle packaging and chopstick accessories"),
                Release::new("onigiri", "Onigiri", "饭团", "F5F5DC", "Toy as rice ball with seaweed wrapper and traditional presentation"),
            ],
        ),
        make_series(
            "one_piece",
            "The Monsters x One Piece Series",
            "怪物×海贼王系列",
            "FF6347",
            "Epic anime collaboration featuring Toy characters reimagined as beloved One Piece crew members. Each 13-figurine blind box captures iconic pirate adventures with golden display bases.",
            vec![
                Release::new("monkey_d_luffy", "Monkey D. Luffy", "蒙奇·D·路飞", "DC143C", "Toy as the Straw Hat Pirates captain with signature red vest and straw hat"),
                Release::new("roronoa_zoro", "Roronoa Zoro", "罗罗诺亚·索隆", "228B22", "Toy as the three-sword style swordsman with green hair and katanas"),
                Release::new("nami", "Nami", "娜美", "FF8C00", "Toy as the navigator with orange hair and weather manipulation staff"),
                Release::new("usopp", "Usopp", "乌索普", "8B4513", "Toy as the sniper with long nose and slingshot equipment"),
                Release::new("sanji", "Sanji", "山治", "FFD700", "Toy as the cook with blonde hair and black suit"),
                Release::new("tony_tony_chopper", "Tony Tony Chopper", "托尼托尼·乔巴", "FF69B4", "Toy as the reindeer doctor with blue nose and pink hat"),
                Release::new("nico_robin", "Nico Robin", "妮可·罗宾", "800080", "Toy as the archaeologist with black hair and sunglasses"),
                Release::new("franky", "Franky", "弗兰奇", "00CED1", "Toy as the cyborg shipwright with blue hair and mechanical arms"),
                Release::new("brook", "Brook", "布鲁克", "FFD700", "Toy as the skeleton musician with afro and golden crown"),
                Release::new("jinbe", "Jinbe", "甚平", "4169E1", "Toy as the fish-man helmsman with blue skin and traditional outfit"),
                Release::new("sabo", "Sabo", "萨博", "000080", "Toy as the Revolutionary Army chief with top hat and goggles"),
                Release::new("trafalgar_law", "Trafalgar Law", "特拉法尔加·罗", "C0C0C0", "Toy as the surgeon of death with spotted hat and nodachi sword"),
            ],
        ),
        make_series(
            "take_a_seat",
            "Take a Seat Series",
            "坐一坐系列",
            "D2B48C",
            "Adorable sitting pose collection featuring Toy in relaxed positions with various expressions. Each fluffy keychain figure showcases different moods and personalities in comfortable seated poses.",
            vec![
                Release::new("sisi", "Sisi", "思思", "F5DEB3", "Beige fluffy Toy in sitting pose with gentle closed-eye expression and warm keychain"),
                Release::new("hehe", "Hehe", "呵呵", "808080", "Gray fluffy Toy in sitting pose with playful winking expression and silver keychain"),
                Release::new("baba", "Baba", "爸爸", "DEB887", "Light brown fluffy Toy in sitting pose with sweet wide-eyed expression and golden keychain"),
                Release::new("zizi", "Zizi", "紫紫", "9370DB", "Purple fluffy Toy in sitting pose with sleepy peaceful expression and lavender keychain"),
                Release::new("ququ", "Ququ", "曲曲", "98FB98", "Mint green fluffy Toy in sitting pose with bright curious expression and pastel keychain"),
                Release::new("dada", "Dada", "哒哒", "FFB6C1", "Pink fluffy Toy in sitting pose with cheerful blushing expression and rose keychain"),
            ],
        ),
    ]
}

fn make_series(id: &str, name: &str, localized_name: &str, color: &str, description: &str, releases: Vec<Release>) -> Series {
    Series {
        id: id.to_string(),
        name: name.to_string(),
        localized_name: localized_name.to_string(),
        releases,
        color: color.to_string(),
        description: description.to_string(),
    }
}
