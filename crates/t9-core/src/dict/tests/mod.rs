mod prefix_props;
